//! Adapter implementations for performance ledger ports.

pub mod memory;
pub mod postgres;
