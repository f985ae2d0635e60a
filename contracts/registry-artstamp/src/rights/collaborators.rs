use crate::*;

#[near]
impl Contract {
    /// Records a collaborator on a token. Re-adding the same account
    /// overwrites the entry and refreshes its timestamp.
    #[handle_result]
    pub fn add_collaborator(
        &mut self,
        token_id: u64,
        collaborator: AccountId,
        role: String,
        permissions: Vec<String>,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_add_collaborator(&actor_id, token_id, collaborator, role, permissions)
    }
}

impl Contract {
    pub(crate) fn internal_add_collaborator(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        collaborator: AccountId,
        role: String,
        permissions: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        validation::check_str_len("Role", &role, MAX_ROLE_LEN)?;
        if permissions.len() > MAX_PERMISSIONS {
            return Err(RegistryError::InvalidPermission(format!(
                "At most {} permissions are allowed, got {}",
                MAX_PERMISSIONS,
                permissions.len()
            )));
        }
        let record = CollaboratorRecord {
            role,
            permissions,
            added_at: env::block_timestamp(),
        };
        events::emit_collaborator_added(actor_id, token_id, &collaborator, &record.role);
        self.collaborators.insert((token_id, collaborator), record);
        Ok(())
    }
}
