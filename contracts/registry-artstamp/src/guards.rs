use crate::*;

impl Contract {
    /// Lifecycle gate. Only mint, transfer and burn call this; rights and
    /// verification methods stay live while the registry is paused.
    pub(crate) fn check_not_paused(&self, action: &str) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::paused(action));
        }
        Ok(())
    }

    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.admin_id {
            return Err(RegistryError::not_admin());
        }
        Ok(())
    }

    /// Ownership gate for token-scoped mutations. A token with no recorded
    /// owner reports `NotOwner`, same as a caller who is not the owner.
    pub(crate) fn check_token_owner(
        &self,
        actor_id: &AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        match self.owners.get(&token_id) {
            Some(owner) if owner == actor_id => Ok(()),
            _ => Err(RegistryError::not_owner()),
        }
    }
}
