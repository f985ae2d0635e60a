use crate::*;

#[near]
impl Contract {
    /// Registers a numbered revision of the token's content. Each
    /// (token, version) pair is write-once.
    #[handle_result]
    pub fn register_version(
        &mut self,
        token_id: u64,
        version: u32,
        content_hash: Base64VecU8,
        notes: String,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_register_version(&actor_id, token_id, version, content_hash, notes)
    }
}

impl Contract {
    pub(crate) fn internal_register_version(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        version: u32,
        content_hash: Base64VecU8,
        notes: String,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        // Conflict is reported before content validation when both apply.
        if self.versions.contains_key(&(token_id, version)) {
            return Err(RegistryError::VersionAlreadyExists(format!(
                "Version {} is already registered for token {}",
                version, token_id
            )));
        }
        validation::validate_hash(&content_hash)?;
        validation::check_str_len("Notes", &notes, MAX_NOTES_LEN)?;
        self.versions.insert(
            (token_id, version),
            VersionRecord {
                content_hash,
                notes,
                registered_at: env::block_timestamp(),
            },
        );
        events::emit_version_registered(actor_id, token_id, version);
        Ok(())
    }
}
