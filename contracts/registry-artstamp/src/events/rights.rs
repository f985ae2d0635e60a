use near_sdk::AccountId;

use super::RIGHTS;
use super::builder::EventBuilder;

pub fn emit_royalty_set(owner_id: &AccountId, token_id: u64, recipient: &AccountId, bps: u16) {
    EventBuilder::new(RIGHTS, "royalty_set", owner_id)
        .field("token_id", token_id)
        .field("recipient", recipient)
        .field("royalty_bps", bps as u32)
        .emit();
}

pub fn emit_version_registered(owner_id: &AccountId, token_id: u64, version: u32) {
    EventBuilder::new(RIGHTS, "version_registered", owner_id)
        .field("token_id", token_id)
        .field("version", version)
        .emit();
}

pub fn emit_license_granted(
    owner_id: &AccountId,
    token_id: u64,
    licensee: &AccountId,
    expires_at: u64,
) {
    EventBuilder::new(RIGHTS, "license_granted", owner_id)
        .field("token_id", token_id)
        .field("licensee", licensee)
        .field("expires_at", expires_at)
        .emit();
}

pub fn emit_license_revoked(owner_id: &AccountId, token_id: u64, licensee: &AccountId) {
    EventBuilder::new(RIGHTS, "license_revoked", owner_id)
        .field("token_id", token_id)
        .field("licensee", licensee)
        .emit();
}

pub fn emit_category_set(owner_id: &AccountId, token_id: u64, category: &str, tags: &[String]) {
    EventBuilder::new(RIGHTS, "category_set", owner_id)
        .field("token_id", token_id)
        .field("category", category)
        .field("tags", tags)
        .emit();
}

pub fn emit_collaborator_added(
    owner_id: &AccountId,
    token_id: u64,
    collaborator: &AccountId,
    role: &str,
) {
    EventBuilder::new(RIGHTS, "collaborator_added", owner_id)
        .field("token_id", token_id)
        .field("collaborator", collaborator)
        .field("role", role)
        .emit();
}

pub fn emit_status_updated(owner_id: &AccountId, token_id: u64, status: &str, visible: bool) {
    EventBuilder::new(RIGHTS, "status_updated", owner_id)
        .field("token_id", token_id)
        .field("status", status)
        .field("visible", visible)
        .emit();
}

pub fn emit_revenue_share_set(
    owner_id: &AccountId,
    token_id: u64,
    participant: &AccountId,
    percent: u8,
) {
    EventBuilder::new(RIGHTS, "revenue_share_set", owner_id)
        .field("token_id", token_id)
        .field("participant", participant)
        .field("percent", percent as u32)
        .emit();
}
