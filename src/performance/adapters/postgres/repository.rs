//! `PostgreSQL` repository implementation for performance ledger storage.

use super::{
    models::{NewPerformanceRow, PerformanceRow},
    schema::performance_records,
};
use crate::account::domain::AccountId;
use crate::performance::{
    domain::{PerformanceRecord, PerformanceRecordId, PersistedPerformanceData, Rating},
    ports::{PerformanceRepository, PerformanceRepositoryError, PerformanceRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by performance adapters.
pub type PerformancePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed performance repository.
#[derive(Debug, Clone)]
pub struct PostgresPerformanceRepository {
    pool: PerformancePgPool,
}

impl PostgresPerformanceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PerformancePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PerformanceRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PerformanceRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(PerformanceRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(PerformanceRepositoryError::persistence)?
    }
}

#[async_trait]
impl PerformanceRepository for PostgresPerformanceRepository {
    async fn insert(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()> {
        let employee_id = record.employee_id();
        let new_row = to_new_row(record)?;

        self.run_blocking(move |connection| {
            // One-record-per-employee is a ledger-level expectation, not a
            // schema constraint; the pre-check keeps the port contract.
            let existing = find_row_by_employee(connection, employee_id)?;
            if existing.is_some() {
                return Err(PerformanceRepositoryError::DuplicateRecord(employee_id));
            }

            diesel::insert_into(performance_records::table)
                .values(&new_row)
                .execute(connection)
                .map_err(PerformanceRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn update(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()> {
        let employee_id = record.employee_id();
        let row = to_new_row(record)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                performance_records::table
                    .filter(performance_records::employee_id.eq(employee_id.into_inner())),
            )
            .set((
                performance_records::tasks_assigned.eq(row.tasks_assigned),
                performance_records::tasks_completed.eq(row.tasks_completed),
                performance_records::rating.eq(row.rating),
                performance_records::feedback.eq(row.feedback),
                performance_records::month.eq(row.month),
                performance_records::year.eq(row.year),
                performance_records::updated_at.eq(row.updated_at),
            ))
            .execute(connection)
            .map_err(PerformanceRepositoryError::persistence)?;

            if updated == 0 {
                return Err(PerformanceRepositoryError::NotFound(employee_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_employee(
        &self,
        employee_id: AccountId,
    ) -> PerformanceRepositoryResult<Option<PerformanceRecord>> {
        self.run_blocking(move |connection| {
            let row = find_row_by_employee(connection, employee_id)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn list_all(&self) -> PerformanceRepositoryResult<Vec<PerformanceRecord>> {
        self.run_blocking(move |connection| {
            let rows = performance_records::table
                .order(performance_records::updated_at.desc())
                .select(PerformanceRow::as_select())
                .load::<PerformanceRow>(connection)
                .map_err(PerformanceRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }
}

fn find_row_by_employee(
    connection: &mut PgConnection,
    employee_id: AccountId,
) -> PerformanceRepositoryResult<Option<PerformanceRow>> {
    performance_records::table
        .filter(performance_records::employee_id.eq(employee_id.into_inner()))
        .select(PerformanceRow::as_select())
        .first::<PerformanceRow>(connection)
        .optional()
        .map_err(PerformanceRepositoryError::persistence)
}

fn to_new_row(record: &PerformanceRecord) -> PerformanceRepositoryResult<NewPerformanceRow> {
    let tasks_assigned =
        i64::try_from(record.tasks_assigned()).map_err(PerformanceRepositoryError::persistence)?;
    let tasks_completed =
        i64::try_from(record.tasks_completed()).map_err(PerformanceRepositoryError::persistence)?;

    Ok(NewPerformanceRow {
        id: record.id().into_inner(),
        employee_id: record.employee_id().into_inner(),
        tasks_assigned,
        tasks_completed,
        rating: record.rating().map(|rating| i16::from(rating.value())),
        feedback: record.feedback().map(str::to_owned),
        month: record.month().to_owned(),
        year: record.year(),
        updated_at: record.updated_at(),
    })
}

fn row_to_record(row: PerformanceRow) -> PerformanceRepositoryResult<PerformanceRecord> {
    let tasks_assigned =
        u64::try_from(row.tasks_assigned).map_err(PerformanceRepositoryError::persistence)?;
    let tasks_completed =
        u64::try_from(row.tasks_completed).map_err(PerformanceRepositoryError::persistence)?;
    let rating = row
        .rating
        .map(|value| {
            let raw = u8::try_from(value).map_err(PerformanceRepositoryError::persistence)?;
            Rating::new(raw).map_err(PerformanceRepositoryError::persistence)
        })
        .transpose()?;

    let data = PersistedPerformanceData {
        id: PerformanceRecordId::from_uuid(row.id),
        employee_id: AccountId::from_uuid(row.employee_id),
        tasks_assigned,
        tasks_completed,
        rating,
        feedback: row.feedback,
        month: row.month,
        year: row.year,
        updated_at: row.updated_at,
    };
    Ok(PerformanceRecord::from_persisted(data))
}
