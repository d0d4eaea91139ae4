use anchor_lang::prelude::*;

/// Emitted exactly once per successful create/list/buy/cancel. This is the
/// durable record downstream indexers mirror into queryable views.
///
/// `from` is the default pubkey for a mint. `token_uri` is only populated on
/// creation; listed and sold tokens resolve metadata off-chain by id.
#[event]
pub struct NftTransferred {
    pub token_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
    pub token_uri: String,
    pub price: u64,
}
