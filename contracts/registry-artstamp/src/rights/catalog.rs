use crate::*;

#[near]
impl Contract {
    /// Classifies a token. The previous category record, tags included, is
    /// replaced wholesale.
    #[handle_result]
    pub fn add_category(
        &mut self,
        token_id: u64,
        category: String,
        tags: Vec<String>,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_add_category(&actor_id, token_id, category, tags)
    }

    /// Updates the status label and visibility flag. Labels are free-form
    /// up to the length cap.
    #[handle_result]
    pub fn update_status(
        &mut self,
        token_id: u64,
        status: String,
        visible: bool,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_update_status(&actor_id, token_id, status, visible)
    }
}

impl Contract {
    pub(crate) fn internal_add_category(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        category: String,
        tags: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        validation::check_str_len("Category", &category, MAX_CATEGORY_LEN)?;
        if tags.len() > MAX_TAGS {
            return Err(RegistryError::TooManyTags(format!(
                "At most {} tags are allowed, got {}",
                MAX_TAGS,
                tags.len()
            )));
        }
        let info = CategoryInfo {
            category,
            tags,
            updated_at: env::block_timestamp(),
        };
        events::emit_category_set(actor_id, token_id, &info.category, &info.tags);
        self.categories.insert(token_id, info);
        Ok(())
    }

    pub(crate) fn internal_update_status(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        status: String,
        visible: bool,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        validation::check_str_len("Status", &status, MAX_STATUS_LEN)?;
        let record = StatusRecord {
            status,
            visible,
            updated_at: env::block_timestamp(),
        };
        events::emit_status_updated(actor_id, token_id, &record.status, visible);
        self.statuses.insert(token_id, record);
        Ok(())
    }
}
