use crate::*;

#[near]
impl Contract {
    /// Sets a participant's revenue share in whole percent. Shares are per
    /// participant and are not required to sum to 100 across a token.
    #[handle_result]
    pub fn set_revenue_share(
        &mut self,
        token_id: u64,
        participant: AccountId,
        percent: u8,
    ) -> Result<(), RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.internal_set_revenue_share(&actor_id, token_id, participant, percent)
    }
}

impl Contract {
    /// Every call resets `total_received` to zero; accrual is settled by
    /// the distribution process, not by this method.
    pub(crate) fn internal_set_revenue_share(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        participant: AccountId,
        percent: u8,
    ) -> Result<(), RegistryError> {
        self.check_token_owner(actor_id, token_id)?;
        let percent = SharePercent::new(percent)?;
        self.revenue_shares.insert(
            (token_id, participant.clone()),
            RevenueShare {
                percent,
                total_received: U128(0),
            },
        );
        events::emit_revenue_share_set(actor_id, token_id, &participant, percent.as_u8());
        Ok(())
    }
}
