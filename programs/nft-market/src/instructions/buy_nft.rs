use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};

use crate::events::NftTransferred;
use crate::state::{Marketplace, TokenRecord};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct BuyNft<'info> {
    #[account(
        mut,
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

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Receives the seller's share of the sale price
    /// CHECK: compared against the listing's recorded seller in settle_sale
    #[account(mut)]
    pub seller: UncheckedAccount<'info>,

    /// Fee custody PDA
    #[account(
        mut,
        seeds = [b"treasury", marketplace.key().as_ref()],
        bump = marketplace.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BuyNft>, token_id: u64, amount: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let custodian = ctx.accounts.marketplace.key();

    // Listing, payment and payout-recipient preconditions are all checked
    // in settle_sale before it mutates anything. A failed transfer below
    // aborts the whole transaction, so the record mutations never commit
    // on their own.
    let split =
        ctx.accounts
            .token
            .settle_sale(buyer, amount, ctx.accounts.seller.key())?;

    msg!(
        "Payment breakdown: price={}, seller_profit={}, fee={}",
        amount,
        split.seller_profit,
        split.fee
    );

    if split.seller_profit > 0 {
        invoke(
            &system_instruction::transfer(
                ctx.accounts.buyer.key,
                ctx.accounts.seller.key,
                split.seller_profit,
            ),
            &[
                ctx.accounts.buyer.to_account_info(),
                ctx.accounts.seller.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    if split.fee > 0 {
        invoke(
            &system_instruction::transfer(
                ctx.accounts.buyer.key,
                ctx.accounts.treasury.key,
                split.fee,
            ),
            &[
                ctx.accounts.buyer.to_account_info(),
                ctx.accounts.treasury.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    ctx.accounts.marketplace.record_fee(split.fee)?;

    msg!(
        "Purchase completed: id={}, buyer={}, seller={}",
        token_id,
        buyer,
        split.seller
    );

    emit!(NftTransferred {
        token_id,
        from: custodian,
        to: buyer,
        token_uri: String::new(),
        price: 0,
    });

    Ok(())
}
