//! Port contracts for the performance ledger.

pub mod repository;

pub use repository::{
    PerformanceRepository, PerformanceRepositoryError, PerformanceRepositoryResult,
};
