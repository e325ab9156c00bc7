//! Domain model for the performance ledger.

mod error;
mod record;

pub use error::PerformanceDomainError;
pub use record::{PerformanceRecord, PerformanceRecordId, PersistedPerformanceData, Rating};
