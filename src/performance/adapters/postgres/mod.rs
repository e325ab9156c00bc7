//! `PostgreSQL` adapters for performance ledger persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PerformancePgPool, PostgresPerformanceRepository};
