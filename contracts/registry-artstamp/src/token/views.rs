use crate::*;

#[near]
impl Contract {
    pub fn get_owner(&self, token_id: u64) -> Option<AccountId> {
        self.owners.get(&token_id).cloned()
    }

    pub fn get_token_metadata(&self, token_id: u64) -> Option<TokenMetadata> {
        self.token_metadata.get(&token_id).cloned()
    }

    /// Total tokens ever minted. Burning does not decrease this.
    pub fn get_token_count(&self) -> u64 {
        self.token_counter
    }
}
