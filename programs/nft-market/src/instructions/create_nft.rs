use anchor_lang::prelude::*;

use crate::events::NftTransferred;
use crate::state::{Marketplace, TokenRecord};

#[derive(Accounts)]
pub struct CreateNft<'info> {
    #[account(
        mut,
        seeds = [b"marketplace"],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// Record for the minted token, keyed by the next sequential id.
    #[account(
        init,
        payer = creator,
        space = TokenRecord::LEN,
        seeds = [b"token", marketplace.token_count.to_le_bytes().as_ref()],
        bump
    )]
    pub token: Account<'info, TokenRecord>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateNft>, token_uri: String) -> Result<()> {
    let token_id = ctx.accounts.marketplace.allocate_token_id()?;
    let creator = ctx.accounts.creator.key();

    let record = TokenRecord::mint(token_id, creator, token_uri.clone(), ctx.bumps.token)?;
    ctx.accounts.token.set_inner(record);

    msg!("NFT created: id={}, owner={}", token_id, creator);

    emit!(NftTransferred {
        token_id,
        from: Pubkey::default(),
        to: creator,
        token_uri,
        price: 0,
    });

    Ok(())
}
