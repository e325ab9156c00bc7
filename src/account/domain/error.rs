//! Error types for account domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain account values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The account name is empty after trimming.
    #[error("account name must not be empty")]
    EmptyName,

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The plaintext password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The password hashing backend rejected the input.
    #[error("password hashing failed: {0}")]
    PasswordHashing(String),
}

/// Error returned while parsing account roles from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown account role: {0}")]
pub struct ParseRoleError(pub String);
