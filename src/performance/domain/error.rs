//! Error types for performance domain validation.

use thiserror::Error;

/// Errors returned while constructing domain performance values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PerformanceDomainError {
    /// The rating is outside the 1-5 scale.
    #[error("invalid rating {0}, expected a value between 1 and 5")]
    InvalidRating(u8),
}
