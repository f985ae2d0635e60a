use crate::*;

#[near]
impl Contract {
    /// Sets or replaces the royalty terms for a token. `percentage` is in
    /// basis points. Rights methods are not gated by the pause flag.
    #[handle_result]
    pub fn set_royalty(
        &mut self,
        token_id: u64,
        recipient: AccountId,
        percentage: u16,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_set_royalty(&actor_id, token_id, recipient, percentage)
    }
}

impl Contract {
    pub(crate) fn internal_set_royalty(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        recipient: AccountId,
        percentage: u16,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        let percentage = BasisPoints::new(percentage)?;
        self.royalties.insert(
            token_id,
            RoyaltyInfo {
                recipient: recipient.clone(),
                percentage,
                updated_at: env::block_timestamp(),
            },
        );
        events::emit_royalty_set(actor_id, token_id, &recipient, percentage.as_u16());
        Ok(())
    }
}
