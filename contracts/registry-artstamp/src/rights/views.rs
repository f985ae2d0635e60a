use crate::*;

#[near]
impl Contract {
    pub fn get_royalty(&self, token_id: u64) -> Option<RoyaltyInfo> {
        self.royalties.get(&token_id).cloned()
    }

    pub fn get_token_version(&self, token_id: u64, version: u32) -> Option<VersionRecord> {
        self.versions.get(&(token_id, version)).cloned()
    }

    /// Returns the license record whether granted or revoked.
    pub fn get_license(&self, token_id: u64, licensee: AccountId) -> Option<LicenseRecord> {
        self.licenses.get(&(token_id, licensee)).cloned()
    }

    pub fn get_category(&self, token_id: u64) -> Option<CategoryInfo> {
        self.categories.get(&token_id).cloned()
    }

    pub fn get_collaborator(
        &self,
        token_id: u64,
        collaborator: AccountId,
    ) -> Option<CollaboratorRecord> {
        self.collaborators.get(&(token_id, collaborator)).cloned()
    }

    pub fn get_status(&self, token_id: u64) -> Option<StatusRecord> {
        self.statuses.get(&token_id).cloned()
    }

    pub fn get_revenue_share(
        &self,
        token_id: u64,
        participant: AccountId,
    ) -> Option<RevenueShare> {
        self.revenue_shares.get(&(token_id, participant)).cloned()
    }
}
