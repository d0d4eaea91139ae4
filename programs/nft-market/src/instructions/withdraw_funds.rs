use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke_signed, system_instruction};

use crate::state::Marketplace;

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(
        mut,
        seeds = [b"marketplace"],
        bump = marketplace.bump
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// Fee custody PDA, debited with its own seeds as signer
    #[account(
        mut,
        seeds = [b"treasury", marketplace.key().as_ref()],
        bump = marketplace.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawFunds>) -> Result<()> {
    // Authority and balance checks happen before any lamports move; a
    // failed transfer aborts the transaction, so the balance reset never
    // commits without the payout.
    let amount = ctx
        .accounts
        .marketplace
        .take_fees(ctx.accounts.authority.key())?;

    let marketplace_key = ctx.accounts.marketplace.key();
    let seeds = &[
        b"treasury".as_ref(),
        marketplace_key.as_ref(),
        &[ctx.accounts.marketplace.treasury_bump],
    ];
    let signer = &[&seeds[..]];

    invoke_signed(
        &system_instruction::transfer(
            ctx.accounts.treasury.key,
            ctx.accounts.authority.key,
            amount,
        ),
        &[
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.authority.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        signer,
    )?;

    msg!(
        "Fees withdrawn: authority={}, amount={}",
        ctx.accounts.authority.key(),
        amount
    );

    Ok(())
}
