use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::near;

/// Descriptive record attached to a token at mint. Immutable for the life
/// of the token; removed when the token is burned.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenMetadata {
    /// 32-byte content digest of the registered work.
    pub content_hash: Base64VecU8,
    pub title: String,
    pub description: String,
    /// Listed price in yoctoNEAR.
    pub price: U128,
    pub uri: Option<String>,
    /// Block timestamp (nanoseconds) at mint.
    pub minted_at: u64,
}
