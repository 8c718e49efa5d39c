use crate::domain::entities::{AccountId, Vacation};
use crate::domain::errors::DomainResult;

/// Storage of per-account vacation configuration.
#[async_trait::async_trait]
pub trait VacationRepository: Send + Sync {
    /// Returns the stored configuration, or `Vacation::default()` when the
    /// account never stored one. Never reports a missing value.
    async fn retrieve_vacation(&self, account_id: &AccountId) -> DomainResult<Vacation>;

    /// Replace the configuration of an account
    async fn modify_vacation(&self, account_id: &AccountId, vacation: &Vacation)
        -> DomainResult<()>;
}
