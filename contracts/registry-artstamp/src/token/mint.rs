use crate::*;

#[near]
impl Contract {
    /// Registers a new work and returns its token id. Ids are handed out
    /// sequentially starting at 1.
    #[handle_result]
    pub fn mint_token(
        &mut self,
        content_hash: Base64VecU8,
        title: String,
        description: String,
        price: U128,
        uri: Option<String>,
    ) -> Result<u64, RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.mint(&actor_id, content_hash, title, description, price, uri)
    }
}

impl Contract {
    pub(crate) fn mint(
        &mut self,
        actor_id: &AccountId,
        content_hash: Base64VecU8,
        title: String,
        description: String,
        price: U128,
        uri: Option<String>,
    ) -> Result<u64, RegistryError> {
        self.check_not_paused("mint")?;
        validation::validate_mint_fields(
            &content_hash,
            &title,
            &description,
            price.0,
            uri.as_deref(),
        )?;

        // The counter only advances once validation has passed, so a
        // failed mint never consumes an id.
        self.token_counter += 1;
        let token_id = self.token_counter;
        let now = env::block_timestamp();

        self.owners.insert(token_id, actor_id.clone());
        self.statuses.insert(
            token_id,
            StatusRecord {
                status: INITIAL_STATUS.to_string(),
                visible: true,
                updated_at: now,
            },
        );
        let metadata = TokenMetadata {
            content_hash,
            title,
            description,
            price,
            uri,
            minted_at: now,
        };
        events::emit_token_minted(
            actor_id,
            token_id,
            &metadata.title,
            metadata.price,
            metadata.uri.as_deref(),
        );
        self.token_metadata.insert(token_id, metadata);
        Ok(token_id)
    }
}
