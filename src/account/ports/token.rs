//! Token issuance port for authenticated sessions.
//!
//! Token issuance is an external capability: the directory only requires
//! that a signed token can be produced for a verified account. The concrete
//! signing scheme lives in an adapter.

use crate::account::domain::Account;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for token issuance operations.
pub type TokenIssuerResult<T> = Result<T, TokenIssuerError>;

/// Opaque signed session token handed to the request layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a signed token string.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the token as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session token issuance contract.
pub trait TokenIssuer: Send + Sync {
    /// Issues a signed token for a verified account.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssuerError::Signing`] when the token cannot be
    /// produced.
    fn issue(&self, account: &Account) -> TokenIssuerResult<AuthToken>;
}

/// Errors returned by token issuer implementations.
#[derive(Debug, Clone, Error)]
pub enum TokenIssuerError {
    /// The signing backend rejected the token payload.
    #[error("token signing failed: {0}")]
    Signing(Arc<dyn std::error::Error + Send + Sync>),
}

impl TokenIssuerError {
    /// Wraps a signing error.
    pub fn signing(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Signing(Arc::new(err))
    }
}
