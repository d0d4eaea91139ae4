use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Caller does not hold this token")]
    NotOwner,

    #[msg("Price must be greater than 0")]
    InvalidPrice,

    #[msg("Token is not listed for sale")]
    NotListed,

    #[msg("Payment does not equal the listing price")]
    IncorrectPrice,

    #[msg("Only the seller can cancel this listing")]
    NotSeller,

    #[msg("Only the marketplace authority can withdraw fees")]
    NotAdmin,

    #[msg("Fee balance is zero")]
    ZeroBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Token URI exceeds the maximum length")]
    UriTooLong,

    #[msg("Seller account does not match the listing")]
    SellerMismatch,
}
