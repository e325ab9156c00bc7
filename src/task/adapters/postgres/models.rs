//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Employee the task is assigned to.
    pub assigned_to: uuid::Uuid,
    /// Employer who assigned the task.
    pub assigned_by: uuid::Uuid,
    /// Task status.
    pub status: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Employee the task is assigned to.
    pub assigned_to: uuid::Uuid,
    /// Employer who assigned the task.
    pub assigned_by: uuid::Uuid,
    /// Task status.
    pub status: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}
