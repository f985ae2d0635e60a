use crate::*;

#[near]
impl Contract {
    /// Retires a token. Owner, metadata, royalty, category and status are
    /// deleted; versions, licenses, collaborators and revenue shares are
    /// retained as orphaned history. The id is never reissued.
    #[handle_result]
    pub fn burn_token(&mut self, token_id: u64) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.burn(&actor_id, token_id)
    }
}

impl Contract {
    pub(crate) fn burn(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        self.check_not_paused("burn")?;
        self.check_token_owner(actor_id, token_id)?;
        self.owners.remove(&token_id);
        self.token_metadata.remove(&token_id);
        self.royalties.remove(&token_id);
        self.categories.remove(&token_id);
        self.statuses.remove(&token_id);
        events::emit_token_burned(actor_id, token_id);
        Ok(())
    }
}
