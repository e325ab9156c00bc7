//! In-memory adapters for performance ledger tests.

mod ledger;

pub use ledger::InMemoryPerformanceRepository;
