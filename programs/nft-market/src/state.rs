use anchor_lang::prelude::*;

use crate::error::MarketError;

/// Seller receives 95% of the sale price; the remainder stays with the
/// marketplace as its fee. The fee is computed by subtraction so the two
/// parts always sum to the price exactly.
pub const SELLER_SHARE_PERCENT: u64 = 95;

/// Stored token URIs are bounded so TokenRecord accounts have a fixed size.
pub const MAX_URI_LEN: usize = 200;

/// Singleton marketplace state.
/// Seeds: [b"marketplace"]
#[account]
pub struct Marketplace {
    pub authority: Pubkey,    // Administrator, sole withdrawer of fees
    pub token_count: u64,     // Next token id; ids are sequential from 0
    pub accrued_fees: u64,    // Withdrawable lamports held by the treasury PDA
    pub bump: u8,
    pub treasury_bump: u8,
}

impl Marketplace {
    pub const LEN: usize = 8 +  // discriminator
        32 +                     // authority
        8 +                      // token_count
        8 +                      // accrued_fees
        1 +                      // bump
        1;                       // treasury_bump

    /// Hand out the next sequential token id. Ids are never reused.
    pub fn allocate_token_id(&mut self) -> std::result::Result<u64, MarketError> {
        let id = self.token_count;
        self.token_count = self
            .token_count
            .checked_add(1)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(id)
    }

    /// Accrue a sale fee into the withdrawable balance.
    pub fn record_fee(&mut self, fee: u64) -> std::result::Result<(), MarketError> {
        self.accrued_fees = self
            .accrued_fees
            .checked_add(fee)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Claim the entire fee balance. Only the authority may withdraw, and
    /// only when there is something to withdraw.
    pub fn take_fees(&mut self, caller: Pubkey) -> std::result::Result<u64, MarketError> {
        if caller != self.authority {
            return Err(MarketError::NotAdmin);
        }
        if self.accrued_fees == 0 {
            return Err(MarketError::ZeroBalance);
        }
        let amount = self.accrued_fees;
        self.accrued_fees = 0;
        Ok(amount)
    }
}

/// One record per minted token.
/// Seeds: [b"token", token_id.to_le_bytes()]
///
/// A token is listed iff `price > 0`; while listed the owner of record is
/// the marketplace PDA (custodial address) and `seller` names the address
/// entitled to proceeds and cancellation.
#[account]
pub struct TokenRecord {
    pub id: u64,
    pub owner: Pubkey,
    pub uri: String,          // Cleared on first listing; resolved off-chain by id after that
    pub price: u64,           // 0 = not for sale
    pub seller: Pubkey,       // Pubkey::default() unless listed
    pub bump: u8,
}

impl TokenRecord {
    pub const LEN: usize = 8 +  // discriminator
        8 +                      // id
        32 +                     // owner
        4 + MAX_URI_LEN +        // uri
        8 +                      // price
        32 +                     // seller
        1;                       // bump

    /// Mint a fresh record: owned by its creator, not for sale, URI
    /// readable until the first listing.
    pub fn mint(
        id: u64,
        owner: Pubkey,
        uri: String,
        bump: u8,
    ) -> std::result::Result<TokenRecord, MarketError> {
        if uri.len() > MAX_URI_LEN {
            return Err(MarketError::UriTooLong);
        }
        Ok(TokenRecord {
            id,
            owner,
            uri,
            price: 0,
            seller: Pubkey::default(),
            bump,
        })
    }

    pub fn is_listed(&self) -> bool {
        self.price > 0
    }

    /// Whether `caller` currently holds the token. While listed the owner of
    /// record is the custodial PDA, so the recorded seller counts as the
    /// holder (this is what permits re-listing at a new price).
    fn is_held_by(&self, caller: Pubkey) -> bool {
        if self.is_listed() {
            caller == self.seller
        } else {
            caller == self.owner
        }
    }

    /// Put the token up for sale, moving custody to the marketplace.
    /// Re-listing an already listed token overwrites price and seller.
    pub fn list(
        &mut self,
        caller: Pubkey,
        custodian: Pubkey,
        price: u64,
    ) -> std::result::Result<(), MarketError> {
        if !self.is_held_by(caller) {
            return Err(MarketError::NotOwner);
        }
        if price == 0 {
            return Err(MarketError::InvalidPrice);
        }
        self.owner = custodian;
        self.seller = caller;
        self.price = price;
        // Metadata is resolved off-chain by id once the token has been
        // listed; the stored URI is not restored on cancel or sale.
        self.uri.clear();
        Ok(())
    }

    /// Settle a purchase: validate the payment and the payout recipient,
    /// split the proceeds and hand the token to the buyer. Lamport movement
    /// is the caller's job. Nothing is mutated unless every check passes.
    pub fn settle_sale(
        &mut self,
        buyer: Pubkey,
        amount: u64,
        payout_account: Pubkey,
    ) -> std::result::Result<SaleSplit, MarketError> {
        if !self.is_listed() {
            return Err(MarketError::NotListed);
        }
        if amount != self.price {
            return Err(MarketError::IncorrectPrice);
        }
        if payout_account != self.seller {
            return Err(MarketError::SellerMismatch);
        }
        let (seller_profit, fee) = split_proceeds(self.price)?;
        let split = SaleSplit {
            seller: self.seller,
            seller_profit,
            fee,
        };
        self.owner = buyer;
        self.price = 0;
        self.seller = Pubkey::default();
        Ok(split)
    }

    /// Take the token off the market, returning custody to the seller.
    pub fn cancel(&mut self, caller: Pubkey) -> std::result::Result<Pubkey, MarketError> {
        if !self.is_listed() {
            return Err(MarketError::NotListed);
        }
        if caller != self.seller {
            return Err(MarketError::NotSeller);
        }
        let seller = self.seller;
        self.owner = seller;
        self.price = 0;
        self.seller = Pubkey::default();
        Ok(seller)
    }
}

/// Outcome of a settled sale: who gets paid, and how the price divides
/// between seller profit and marketplace fee.
#[derive(Debug, Clone, Copy)]
pub struct SaleSplit {
    pub seller: Pubkey,
    pub seller_profit: u64,
    pub fee: u64,
}

/// Split a sale price into (seller_profit, fee).
/// seller_profit = floor(price * 95 / 100), fee = price - seller_profit,
/// so the parts always sum back to the price with no rounding leakage.
pub fn split_proceeds(price: u64) -> std::result::Result<(u64, u64), MarketError> {
    let seller_profit = (price as u128)
        .checked_mul(SELLER_SHARE_PERCENT as u128)
        .ok_or(MarketError::ArithmeticOverflow)?
        .checked_div(100)
        .ok_or(MarketError::ArithmeticOverflow)? as u64;
    let fee = price
        .checked_sub(seller_profit)
        .ok_or(MarketError::ArithmeticOverflow)?;
    Ok((seller_profit, fee))
}
