//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format so algorithm parameters and the
//! random salt travel with the hash itself. The plaintext never leaves the
//! constructor.

use super::AccountDomainError;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash as PhcString, PasswordHasher, PasswordVerifier,
    SaltString,
};
use serde::{Deserialize, Serialize};

/// Salted Argon2id digest of an account password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes a plaintext password with a freshly generated random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyPassword`] when the plaintext is
    /// empty after trimming, or [`AccountDomainError::PasswordHashing`] when
    /// the hashing backend rejects the input.
    pub fn new(plaintext: &str) -> Result<Self, AccountDomainError> {
        if plaintext.trim().is_empty() {
            return Err(AccountDomainError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| AccountDomainError::PasswordHashing(err.to_string()))?;
        Ok(Self(digest.to_string()))
    }

    /// Reconstructs a hash from its persisted PHC string.
    #[must_use]
    pub const fn from_phc_string(value: String) -> Self {
        Self(value)
    }

    /// Verifies a plaintext candidate against this hash.
    ///
    /// Returns `Ok(false)` on a mismatch; only a corrupt stored hash is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::PasswordHashing`] when the stored value
    /// is not a parseable PHC string.
    pub fn verify(&self, plaintext: &str) -> Result<bool, AccountDomainError> {
        let parsed = PhcString::new(&self.0)
            .map_err(|err| AccountDomainError::PasswordHashing(err.to_string()))?;
        match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(err) => Err(AccountDomainError::PasswordHashing(err.to_string())),
        }
    }

    /// Returns the PHC-formatted hash as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
