//! Domain model for the account directory.
//!
//! The account domain models registered identities with a role of employee
//! or employer, validated contact details, and salted password hashes while
//! keeping all infrastructure concerns outside of the domain boundary.

mod account;
mod error;
mod ids;
mod password;

pub use account::{Account, PersistedAccountData, Role};
pub use error::{AccountDomainError, ParseRoleError};
pub use ids::{AccountId, EmailAddress};
pub use password::PasswordHash;
