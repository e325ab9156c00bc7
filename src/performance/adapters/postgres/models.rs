//! Diesel row models for performance record persistence.

use super::schema::performance_records;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for performance records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = performance_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PerformanceRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Employee the record belongs to.
    pub employee_id: uuid::Uuid,
    /// Assigned-task counter.
    pub tasks_assigned: i64,
    /// Completed-task counter.
    pub tasks_completed: i64,
    /// Optional review rating.
    pub rating: Option<i16>,
    /// Optional review feedback.
    pub feedback: Option<String>,
    /// English month name of the most recent assignment.
    pub month: String,
    /// Year of the most recent assignment.
    pub year: i32,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for performance records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = performance_records)]
pub struct NewPerformanceRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Employee the record belongs to.
    pub employee_id: uuid::Uuid,
    /// Assigned-task counter.
    pub tasks_assigned: i64,
    /// Completed-task counter.
    pub tasks_completed: i64,
    /// Optional review rating.
    pub rating: Option<i16>,
    /// Optional review feedback.
    pub feedback: Option<String>,
    /// English month name of the most recent assignment.
    pub month: String,
    /// Year of the most recent assignment.
    pub year: i32,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}
