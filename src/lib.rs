//! Workboard: employee task assignment and performance tracking core.
//!
//! This crate provides the domain core of an employee task-monitoring
//! system: registering employer and employee accounts, assigning tasks,
//! driving tasks through their status lifecycle, and maintaining the
//! per-employee performance ledger that lifecycle transitions feed.
//!
//! # Architecture
//!
//! Workboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, tokens, etc.)
//!
//! # Modules
//!
//! - [`account`]: Account registration, authentication, and lookup
//! - [`dashboard`]: Read-only employee and employer dashboard views
//! - [`performance`]: Per-employee aggregate performance counters
//! - [`task`]: Task assignment and status lifecycle tracking

pub mod account;
pub mod dashboard;
pub mod performance;
pub mod task;
