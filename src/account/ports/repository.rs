//! Repository port for account persistence and lookup.

use crate::account::domain::{Account, AccountId, EmailAddress, Role};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account repository operations.
pub type AccountRepositoryResult<T> = Result<T, AccountRepositoryError>;

/// Account persistence contract.
///
/// The directory exposes no update or delete operations: accounts are
/// written once at registration and only ever read afterwards.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Stores a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountRepositoryError::DuplicateEmail`] when an account
    /// with the same email address already exists.
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()>;

    /// Finds an account by identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>>;

    /// Finds an account matching both email address and role.
    ///
    /// Returns `None` when no account matches the pair.
    async fn find_by_email_and_role(
        &self,
        email: &EmailAddress,
        role: Role,
    ) -> AccountRepositoryResult<Option<Account>>;

    /// Returns all accounts holding the given role.
    async fn list_by_role(&self, role: Role) -> AccountRepositoryResult<Vec<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountRepositoryError {
    /// An account with the same email address already exists.
    #[error("duplicate email address: {0}")]
    DuplicateEmail(EmailAddress),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
