use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod nft_market {
    use super::*;

    /// One-time marketplace setup: records the fee-withdrawal authority
    /// and creates the treasury PDA
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Mint a token at the next sequential id, owned by the caller
    pub fn create_nft(ctx: Context<CreateNft>, token_uri: String) -> Result<()> {
        create_nft::handler(ctx, token_uri)
    }

    /// List (or re-list) a token at a fixed price; custody moves to the
    /// marketplace until it sells or the listing is cancelled
    pub fn list_nft(ctx: Context<ListNft>, token_id: u64, price: u64) -> Result<()> {
        list_nft::handler(ctx, token_id, price)
    }

    /// Buy a listed token; `amount` must equal the listing price exactly.
    /// 95% goes to the seller, the remainder accrues as marketplace fees
    pub fn buy_nft(ctx: Context<BuyNft>, token_id: u64, amount: u64) -> Result<()> {
        buy_nft::handler(ctx, token_id, amount)
    }

    /// Cancel an active listing and return the token to its seller
    pub fn cancel_listing(ctx: Context<CancelListing>, token_id: u64) -> Result<()> {
        cancel_listing::handler(ctx, token_id)
    }

    /// Withdraw the entire accrued fee balance to the authority
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<()> {
        withdraw_funds::handler(ctx)
    }
}
