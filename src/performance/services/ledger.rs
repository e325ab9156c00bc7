//! Ledger service maintaining per-employee performance counters.

use crate::account::domain::AccountId;
use crate::performance::{
    domain::PerformanceRecord,
    ports::{PerformanceRepository, PerformanceRepositoryError, PerformanceRepositoryResult},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::warn;

/// Performance ledger orchestration service.
///
/// Mutations are driven by the task lifecycle and by employee registration;
/// nothing else writes to the ledger.
pub struct PerformanceLedgerService<R, C>
where
    R: PerformanceRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for PerformanceLedgerService<R, C>
where
    R: PerformanceRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> PerformanceLedgerService<R, C>
where
    R: PerformanceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new ledger service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Idempotently creates a zero-counter record for an employee.
    ///
    /// Called at employee registration and implicitly on first assignment.
    /// A concurrent creation racing this call resolves in its favour.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError`] when persistence fails.
    pub async fn ensure_record(&self, employee_id: AccountId) -> PerformanceRepositoryResult<()> {
        if self.repository.find_by_employee(employee_id).await?.is_some() {
            return Ok(());
        }

        let record = PerformanceRecord::new_zeroed(employee_id, &*self.clock);
        match self.repository.insert(&record).await {
            Ok(()) | Err(PerformanceRepositoryError::DuplicateRecord(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Counts a task assignment, creating the record when absent.
    ///
    /// Upsert semantics: an absent record is created with the counter
    /// already at one.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError`] when persistence fails.
    pub async fn increment_assigned(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<()> {
        match self.repository.find_by_employee(employee_id).await? {
            Some(mut record) => {
                record.record_assignment(&*self.clock);
                self.repository.update(&record).await
            }
            None => {
                let mut record = PerformanceRecord::new_zeroed(employee_id, &*self.clock);
                record.record_assignment(&*self.clock);
                self.repository.insert(&record).await
            }
        }
    }

    /// Counts a task completion.
    ///
    /// A missing record is logged and skipped rather than created:
    /// assignment always precedes completion, so the record should already
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError`] when persistence fails.
    pub async fn increment_completed(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<()> {
        let Some(mut record) = self.repository.find_by_employee(employee_id).await? else {
            warn!(
                employee_id = %employee_id,
                "completion for employee without a performance record; counter not updated"
            );
            return Ok(());
        };

        record.record_completion(&*self.clock);
        self.repository.update(&record).await
    }

    /// Returns the employee's record, or a default-zero record when none is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError`] when persistence fails.
    pub async fn get_record(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<PerformanceRecord> {
        let record = self
            .repository
            .find_by_employee(employee_id)
            .await?
            .unwrap_or_else(|| PerformanceRecord::new_zeroed(employee_id, &*self.clock));
        Ok(record)
    }

    /// Returns every stored performance record.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceRepositoryError`] when persistence fails.
    pub async fn list_records(&self) -> PerformanceRepositoryResult<Vec<PerformanceRecord>> {
        self.repository.list_all().await
    }
}
