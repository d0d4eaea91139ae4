pub mod buy_nft;
pub mod cancel_listing;
pub mod create_nft;
pub mod initialize;
pub mod list_nft;
pub mod withdraw_funds;

pub use buy_nft::*;
pub use cancel_listing::*;
pub use create_nft::*;
pub use initialize::*;
pub use list_nft::*;
pub use withdraw_funds::*;
