use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_admin_changed(old_admin: &AccountId, new_admin: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_changed", old_admin)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}

pub fn emit_contract_paused(admin_id: &AccountId) {
    EventBuilder::new(CONTRACT, "contract_paused", admin_id).emit();
}

pub fn emit_contract_unpaused(admin_id: &AccountId) {
    EventBuilder::new(CONTRACT, "contract_unpaused", admin_id).emit();
}
