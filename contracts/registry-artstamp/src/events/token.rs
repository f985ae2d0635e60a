use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::TOKEN;
use super::builder::EventBuilder;

pub fn emit_token_minted(
    owner_id: &AccountId,
    token_id: u64,
    title: &str,
    price: U128,
    uri: Option<&str>,
) {
    EventBuilder::new(TOKEN, "token_minted", owner_id)
        .field("token_id", token_id)
        .field("title", title)
        .field("price", price)
        .field_opt("uri", uri)
        .emit();
}

pub fn emit_token_transferred(sender_id: &AccountId, receiver_id: &AccountId, token_id: u64) {
    EventBuilder::new(TOKEN, "token_transferred", sender_id)
        .field("receiver_id", receiver_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_token_burned(owner_id: &AccountId, token_id: u64) {
    EventBuilder::new(TOKEN, "token_burned", owner_id)
        .field("token_id", token_id)
        .emit();
}
