use crate::*;

#[near]
impl Contract {
    /// Grants or refreshes a usage license. Granting to an existing
    /// licensee overwrites the record, including one previously revoked.
    #[handle_result]
    pub fn grant_license(
        &mut self,
        token_id: u64,
        licensee: AccountId,
        duration: u64,
        terms: String,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_grant_license(&actor_id, token_id, licensee, duration, terms)
    }

    /// Revokes a license in place. The record stays readable with its
    /// state flipped to `Revoked`.
    #[handle_result]
    pub fn revoke_license(
        &mut self,
        token_id: u64,
        licensee: AccountId,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_revoke_license(&actor_id, token_id, licensee)
    }
}

impl Contract {
    pub(crate) fn internal_grant_license(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        licensee: AccountId,
        duration: u64,
        terms: String,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        validation::check_str_len("Terms", &terms, MAX_TERMS_LEN)?;
        let now = env::block_timestamp();
        // `duration` is in nanoseconds; the expiry saturates rather than
        // wrapping for very long grants.
        let expires_at = now.saturating_add(duration);
        self.licenses.insert(
            (token_id, licensee.clone()),
            LicenseRecord {
                expires_at,
                terms,
                state: LicenseState::Granted,
                granted_at: now,
                revoked_at: None,
            },
        );
        events::emit_license_granted(actor_id, token_id, &licensee, expires_at);
        Ok(())
    }

    pub(crate) fn internal_revoke_license(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        licensee: AccountId,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        let license = self
            .licenses
            .get_mut(&(token_id, licensee.clone()))
            .ok_or_else(|| {
                RegistryError::NotAuthorized(format!(
                    "No license on token {} for {}",
                    token_id, licensee
                ))
            })?;
        license.state = LicenseState::Revoked;
        license.revoked_at = Some(env::block_timestamp());
        events::emit_license_revoked(actor_id, token_id, &licensee);
        Ok(())
    }
}
