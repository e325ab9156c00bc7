//! Service layer for account registration, authentication, and lookup.

use crate::account::{
    domain::{Account, AccountDomainError, AccountId, EmailAddress, PasswordHash, Role},
    ports::{
        AccountRepository, AccountRepositoryError, AuthToken, TokenIssuer, TokenIssuerError,
    },
};
use crate::performance::{
    ports::{PerformanceRepository, PerformanceRepositoryError},
    services::PerformanceLedgerService,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    name: String,
    email: String,
    password: String,
    role: Role,
    department: Option<String>,
    position: Option<String>,
}

impl RegisterAccountRequest {
    /// Creates a request with required registration fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            department: None,
            position: None,
        }
    }

    /// Sets the department.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the position.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }
}

/// Authenticated session handed back to the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Identifier of the authenticated account.
    pub account_id: AccountId,
    /// Signed session token.
    pub token: AuthToken,
}

/// Service-level errors for account directory operations.
#[derive(Debug, Error)]
pub enum AccountDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AccountRepositoryError),
    /// Ledger seeding failed.
    #[error(transparent)]
    Ledger(#[from] PerformanceRepositoryError),
    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenIssuerError),
    /// Email, password, and role did not match a registered account.
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Result type for account directory service operations.
pub type AccountDirectoryResult<T> = Result<T, AccountDirectoryError>;

/// Account directory orchestration service.
#[derive(Clone)]
pub struct AccountDirectoryService<R, P, T, C>
where
    R: AccountRepository,
    P: PerformanceRepository,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    ledger: PerformanceLedgerService<P, C>,
    token_issuer: Arc<T>,
    clock: Arc<C>,
}

impl<R, P, T, C> AccountDirectoryService<R, P, T, C>
where
    R: AccountRepository,
    P: PerformanceRepository,
    T: TokenIssuer,
    C: Clock + Send + Sync,
{
    /// Creates a new account directory service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        ledger: PerformanceLedgerService<P, C>,
        token_issuer: Arc<T>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            ledger,
            token_issuer,
            clock,
        }
    }

    /// Registers a new account.
    ///
    /// Employee registrations additionally seed a zero-counter performance
    /// record so the ledger is ready before the first assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::Domain`] when a field fails
    /// validation, or [`AccountRepositoryError::DuplicateEmail`] (wrapped)
    /// when the email address is already registered.
    pub async fn register(
        &self,
        request: RegisterAccountRequest,
    ) -> AccountDirectoryResult<Account> {
        let email = EmailAddress::new(request.email)?;
        let password_hash = PasswordHash::new(&request.password)?;
        let account = Account::new(
            request.name,
            email,
            password_hash,
            request.role,
            request.department,
            request.position,
            &*self.clock,
        )?;

        self.repository.create(&account).await?;

        if account.role() == Role::Employee {
            self.ledger.ensure_record(account.id()).await?;
        }

        Ok(account)
    }

    /// Authenticates credentials and issues a session token.
    ///
    /// An unknown email/role pair and a wrong password both collapse to
    /// [`AccountDirectoryError::InvalidCredentials`] so the response does
    /// not reveal which part failed.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::InvalidCredentials`] on mismatch,
    /// or a repository/token error when a collaborator fails.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> AccountDirectoryResult<AuthSession> {
        let address =
            EmailAddress::new(email).map_err(|_| AccountDirectoryError::InvalidCredentials)?;
        let account = self
            .repository
            .find_by_email_and_role(&address, role)
            .await?
            .ok_or(AccountDirectoryError::InvalidCredentials)?;

        if !account.password_hash().verify(password)? {
            return Err(AccountDirectoryError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&account)?;
        Ok(AuthSession {
            account_id: account.id(),
            token,
        })
    }

    /// Finds an account matching both email address and role.
    ///
    /// Returns `Ok(None)` when no account matches.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDirectoryError::Domain`] when the email is
    /// malformed, or a repository error when lookup fails.
    pub async fn find_by_email_and_role(
        &self,
        email: &str,
        role: Role,
    ) -> AccountDirectoryResult<Option<Account>> {
        let address = EmailAddress::new(email)?;
        Ok(self
            .repository
            .find_by_email_and_role(&address, role)
            .await?)
    }

    /// Returns all accounts holding the given role.
    ///
    /// Used by the employer surface to enumerate employees for assignment.
    ///
    /// # Errors
    ///
    /// Returns a repository error when lookup fails.
    pub async fn list_by_role(&self, role: Role) -> AccountDirectoryResult<Vec<Account>> {
        Ok(self.repository.list_by_role(role).await?)
    }
}
