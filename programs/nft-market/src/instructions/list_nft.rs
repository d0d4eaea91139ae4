use anchor_lang::prelude::*;

use crate::events::NftTransferred;
use crate::state::{Marketplace, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct ListNft<'info> {
    #[account(
        seeds = [b"marketplace"],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        mut,
        seeds = [b"token", token_id.to_le_bytes().as_ref()],
        bump = token.bump
    )]
    pub token: Account<'info, TokenRecord>,

    pub seller: Signer<'info>,
}

pub fn handler(ctx: Context<ListNft>, token_id: u64, price: u64) -> Result<()> {
    let custodian = ctx.accounts.marketplace.key();
    let seller = ctx.accounts.seller.key();

    ctx.accounts.token.list(seller, custodian, price)?;

    msg!(
        "NFT listed: id={}, seller={}, price={}",
        token_id,
        seller,
        price
    );

    // The URI is deliberately blank once listed; indexers resolve metadata
    // off-chain by token id.
    emit!(NftTransferred {
        token_id,
        from: seller,
        to: custodian,
        token_uri: String::new(),
        price,
    });

    Ok(())
}
