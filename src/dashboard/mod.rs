//! Dashboard assembly for Workboard.
//!
//! This module composes read-only views over the account directory, the
//! task set, and the performance ledger: the employee dashboard (own tasks,
//! own ledger record, derived statistics) and the employer dashboard (all
//! employees, tasks the employer assigned, every ledger record, derived
//! statistics). It owns no state and defines no ports of its own.
//!
//! - View types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
