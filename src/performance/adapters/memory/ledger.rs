//! In-memory repository for performance ledger tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::AccountId;
use crate::performance::{
    domain::PerformanceRecord,
    ports::{PerformanceRepository, PerformanceRepositoryError, PerformanceRepositoryResult},
};

/// Thread-safe in-memory performance repository.
///
/// Records are keyed by employee identifier, giving the one-record-per-
/// employee shape the ledger expects.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPerformanceRepository {
    records: Arc<RwLock<HashMap<AccountId, PerformanceRecord>>>,
}

impl InMemoryPerformanceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PerformanceRepository for InMemoryPerformanceRepository {
    async fn insert(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()> {
        let mut records = self.records.write().map_err(|err| {
            PerformanceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if records.contains_key(&record.employee_id()) {
            return Err(PerformanceRepositoryError::DuplicateRecord(
                record.employee_id(),
            ));
        }
        records.insert(record.employee_id(), record.clone());
        Ok(())
    }

    async fn update(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()> {
        let mut records = self.records.write().map_err(|err| {
            PerformanceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !records.contains_key(&record.employee_id()) {
            return Err(PerformanceRepositoryError::NotFound(record.employee_id()));
        }
        records.insert(record.employee_id(), record.clone());
        Ok(())
    }

    async fn find_by_employee(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<Option<PerformanceRecord>> {
        let records = self.records.read().map_err(|err| {
            PerformanceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.get(&employee_id).cloned())
    }

    async fn list_all(&self) -> PerformanceRepositoryResult<Vec<PerformanceRecord>> {
        let records = self.records.read().map_err(|err| {
            PerformanceRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut all: Vec<PerformanceRecord> = records.values().cloned().collect();
        all.sort_by_key(|record| record.employee_id().into_inner());
        Ok(all)
    }
}
