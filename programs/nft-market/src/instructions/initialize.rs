use anchor_lang::prelude::*;

use crate::state::Marketplace;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Marketplace::LEN,
        seeds = [b"marketplace"],
        bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// Zero-data PDA that custodies accrued fee lamports. The system
    /// program refuses transfers into data-carrying accounts, so fees
    /// cannot live in the marketplace account itself. Only the address is
    /// pinned here; the account is funded by the first fee transfer.
    #[account(
        seeds = [b"treasury", marketplace.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;
    marketplace.authority = ctx.accounts.authority.key();
    marketplace.token_count = 0;
    marketplace.accrued_fees = 0;
    marketplace.bump = ctx.bumps.marketplace;
    marketplace.treasury_bump = ctx.bumps.treasury;

    msg!(
        "Marketplace initialized: authority={}",
        ctx.accounts.authority.key()
    );
    Ok(())
}
