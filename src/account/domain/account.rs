//! Account aggregate root and role types.

use super::{AccountDomainError, AccountId, EmailAddress, ParseRoleError, PasswordHash};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Role a registered account holds in the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Receives task assignments and reports completion.
    Employee,
    /// Assigns tasks and reviews performance.
    Employer,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Employer => "employer",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "employee" => Ok(Self::Employee),
            "employer" => Ok(Self::Employer),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Account aggregate root.
///
/// Accounts are immutable after creation: registration is the only write
/// path the directory exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    name: String,
    email: EmailAddress,
    password_hash: PasswordHash,
    role: Role,
    department: Option<String>,
    position: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted account aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted display name.
    pub name: String,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password hash.
    pub password_hash: PasswordHash,
    /// Persisted role.
    pub role: Role,
    /// Persisted department, if any.
    pub department: Option<String>,
    /// Persisted position, if any.
    pub position: Option<String>,
    /// Persisted registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account at registration time.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyName`] when the display name is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: Role,
        department: Option<String>,
        position: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, AccountDomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AccountDomainError::EmptyName);
        }

        Ok(Self {
            id: AccountId::new(),
            name,
            email,
            password_hash,
            role,
            department,
            position,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            role: data.role,
            department: data.department,
            position: data.position,
            created_at: data.created_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the department, if recorded.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns the position, if recorded.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
