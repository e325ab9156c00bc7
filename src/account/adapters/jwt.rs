//! HS256 JSON Web Token issuer adapter.
//!
//! Tokens carry the account identity claims the request layer needs to
//! authorise follow-up calls. The signing secret and validity window are
//! supplied by the embedding application.

use crate::account::{
    domain::Account,
    ports::{AuthToken, TokenIssuer, TokenIssuerError, TokenIssuerResult},
};
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Default token validity window in hours.
const DEFAULT_VALIDITY_HOURS: i64 = 24;

/// Claims embedded in every issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the account identifier.
    pub sub: Uuid,
    /// Account email address.
    pub email: String,
    /// Account role name (`"employee"` or `"employer"`).
    pub role: String,
    /// Account display name.
    pub name: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// HS256-signing token issuer.
pub struct JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    secret: String,
    validity: Duration,
    clock: Arc<C>,
}

impl<C> Clone for JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            secret: self.secret.clone(),
            validity: self.validity,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an issuer with the default 24-hour validity window.
    #[must_use]
    pub fn new(secret: impl Into<String>, clock: Arc<C>) -> Self {
        Self {
            secret: secret.into(),
            validity: Duration::hours(DEFAULT_VALIDITY_HOURS),
            clock,
        }
    }

    /// Overrides the validity window.
    #[must_use]
    pub fn with_validity(mut self, validity: Duration) -> Self {
        self.validity = validity;
        self
    }

    /// Validates a token signature and expiry, returning the embedded
    /// claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenIssuerError::Signing`] when the signature is invalid
    /// or the token has expired.
    pub fn decode(&self, token: &AuthToken) -> TokenIssuerResult<SessionClaims> {
        let data = decode::<SessionClaims>(
            token.as_str(),
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(TokenIssuerError::signing)?;
        Ok(data.claims)
    }
}

impl<C> TokenIssuer for JwtTokenIssuer<C>
where
    C: Clock + Send + Sync,
{
    fn issue(&self, account: &Account) -> TokenIssuerResult<AuthToken> {
        let issued_at = self.clock.utc();
        let claims = SessionClaims {
            sub: account.id().into_inner(),
            email: account.email().as_str().to_owned(),
            role: account.role().as_str().to_owned(),
            name: account.name().to_owned(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.validity).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenIssuerError::signing)?;
        Ok(AuthToken::new(token))
    }
}
