use anchor_lang::prelude::*;

use crate::events::NftTransferred;
use crate::state::{Marketplace, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct CancelListing<'info> {
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

pub fn handler(ctx: Context<CancelListing>, token_id: u64) -> Result<()> {
    let custodian = ctx.accounts.marketplace.key();

    let seller = ctx.accounts.token.cancel(ctx.accounts.seller.key())?;

    msg!("Listing cancelled: id={}, seller={}", token_id, seller);

    emit!(NftTransferred {
        token_id,
        from: custodian,
        to: seller,
        token_uri: String::new(),
        price: 0,
    });

    Ok(())
}
