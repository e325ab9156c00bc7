//! Repository port for performance record persistence.

use crate::account::domain::AccountId;
use crate::performance::domain::PerformanceRecord;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for performance repository operations.
pub type PerformanceRepositoryResult<T> = Result<T, PerformanceRepositoryError>;

/// Performance record persistence contract.
///
/// Records are addressed by employee: the ledger maintains at most one live
/// record per employee, so lookups and updates key on the employee
/// identifier rather than the record's own id.
#[async_trait]
pub trait PerformanceRepository: Send + Sync {
    /// Stores a new performance record.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError::DuplicateRecord`] when the
    /// employee already has a record.
    async fn insert(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()>;

    /// Persists counter and stamp changes to an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError::NotFound`] when the employee
    /// has no record.
    async fn update(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()>;

    /// Finds the record for an employee.
    ///
    /// Returns `None` when the employee has no record.
    async fn find_by_employee(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<Option<PerformanceRecord>>;

    /// Returns every stored performance record.
    async fn list_all(&self) -> PerformanceRepositoryResult<Vec<PerformanceRecord>>;
}

/// Errors returned by performance repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PerformanceRepositoryError {
    /// The employee already has a performance record.
    #[error("duplicate performance record for employee: {0}")]
    DuplicateRecord(AccountId),

    /// No record exists for the employee.
    #[error("performance record not found for employee: {0}")]
    NotFound(AccountId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PerformanceRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
