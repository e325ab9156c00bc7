//! Account directory for Workboard.
//!
//! This module implements the account directory: registering employer and
//! employee identities, authenticating credentials against stored password
//! hashes, and enumerating accounts by role for task assignment. Accounts
//! are immutable once created; no update or delete path is exposed. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
