//! Performance ledger for Workboard.
//!
//! This module implements the per-employee performance ledger: aggregate
//! counters of tasks assigned and tasks completed, stamped with the month
//! and year of the most recent assignment. Counters are mutated only by
//! task lifecycle transitions and employee registration; the ledger never
//! recomputes them from the task set, so a failed write on one side of a
//! transition leaves the two drifted (an accepted gap of the design, see
//! the lifecycle service). The module follows hexagonal architecture:
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
