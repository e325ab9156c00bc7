//! Task lifecycle management for Workboard.
//!
//! This module owns task records and the state machine that drives the
//! performance ledger: assigning a task to an employee increments their
//! assigned counter, and completing a task stamps the completion time and
//! increments their completed counter. Status transitions are
//! unrestricted, matching the observed system: any status is reachable
//! from any status, and re-entering `completed` re-increments the counter.
//! The module follows hexagonal architecture:
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
