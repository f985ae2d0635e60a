use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(admin_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin_id,
            paused: false,
            token_counter: 0,
            royalties_collected: 0,
            owners: LookupMap::new(StorageKey::Owners),
            token_metadata: LookupMap::new(StorageKey::TokenMetadata),
            royalties: LookupMap::new(StorageKey::Royalties),
            versions: LookupMap::new(StorageKey::Versions),
            licenses: LookupMap::new(StorageKey::Licenses),
            categories: LookupMap::new(StorageKey::Categories),
            collaborators: LookupMap::new(StorageKey::Collaborators),
            statuses: LookupMap::new(StorageKey::Statuses),
            revenue_shares: LookupMap::new(StorageKey::RevenueShares),
        }
    }

    #[handle_result]
    pub fn set_admin(&mut self, new_admin_id: AccountId) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_set_admin(&actor_id, new_admin_id)
    }

    #[handle_result]
    pub fn pause(&mut self) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_pause(&actor_id)
    }

    #[handle_result]
    pub fn unpause(&mut self) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_unpause(&actor_id)
    }

    // --- views ---

    pub fn get_admin(&self) -> &AccountId {
        &self.admin_id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_royalties_collected(&self) -> U128 {
        U128(self.royalties_collected)
    }
}

impl Contract {
    /// Handover takes effect immediately. Administration is not gated by
    /// the pause flag, so a paused registry can still change admins.
    pub(crate) fn internal_set_admin(
        &mut self,
        actor_id: &AccountId,
        new_admin_id: AccountId,
    ) -> Result<(), RegistryError> {
        self.check_admin(actor_id)?;
        let old_admin_id = std::mem::replace(&mut self.admin_id, new_admin_id);
        events::emit_admin_changed(&old_admin_id, &self.admin_id);
        Ok(())
    }

    /// Idempotent: pausing an already paused registry is not an error.
    pub(crate) fn internal_pause(&mut self, actor_id: &AccountId) -> Result<(), RegistryError> {
        self.check_admin(actor_id)?;
        self.paused = true;
        events::emit_contract_paused(actor_id);
        Ok(())
    }

    pub(crate) fn internal_unpause(&mut self, actor_id: &AccountId) -> Result<(), RegistryError> {
        self.check_admin(actor_id)?;
        self.paused = false;
        events::emit_contract_unpaused(actor_id);
        Ok(())
    }
}
