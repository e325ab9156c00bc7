//! In-memory repository for account directory tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountId, EmailAddress, Role},
    ports::{AccountRepository, AccountRepositoryError, AccountRepositoryResult},
};

/// Thread-safe in-memory account repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, Account>,
    email_index: HashMap<EmailAddress, AccountId>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &Account) -> AccountRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let email = account.email().clone();
        if state.email_index.contains_key(&email) {
            return Err(AccountRepositoryError::DuplicateEmail(email));
        }

        state.email_index.insert(email, account.id());
        state.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccountId) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_email_and_role(
        &self,
        email: &EmailAddress,
        role: Role,
    ) -> AccountRepositoryResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = state
            .email_index
            .get(email)
            .and_then(|id| state.accounts.get(id))
            .filter(|account| account.role() == role)
            .cloned();
        Ok(account)
    }

    async fn list_by_role(&self, role: Role) -> AccountRepositoryResult<Vec<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut accounts: Vec<Account> = state
            .accounts
            .values()
            .filter(|account| account.role() == role)
            .cloned()
            .collect();
        accounts.sort_by_key(Account::created_at);
        Ok(accounts)
    }
}
