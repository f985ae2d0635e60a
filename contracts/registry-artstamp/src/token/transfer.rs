use crate::*;

#[near]
impl Contract {
    /// Reassigns ownership of a token. `sender_id` must match the caller.
    /// Rights records stay keyed to the token id and do not move.
    #[handle_result]
    pub fn transfer_token(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.transfer(&actor_id, sender_id, receiver_id, token_id)
    }
}

impl Contract {
    pub(crate) fn transfer(
        &mut self,
        actor_id: &AccountId,
        sender_id: AccountId,
        receiver_id: AccountId,
        token_id: u64,
    ) -> Result<(), RegistryError> {
        self.check_not_paused("transfer")?;
        self.check_token_owner(actor_id, token_id)?;
        if &sender_id != actor_id {
            return Err(RegistryError::not_owner());
        }
        self.owners.insert(token_id, receiver_id.clone());
        events::emit_token_transferred(actor_id, &receiver_id, token_id);
        Ok(())
    }
}
