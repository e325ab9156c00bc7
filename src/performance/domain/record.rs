//! Performance record aggregate and validated scalar types.

use super::PerformanceDomainError;
use crate::account::domain::AccountId;
use chrono::{DateTime, Datelike, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a performance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceRecordId(Uuid);

impl PerformanceRecordId {
    /// Creates a new random record identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a record identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for PerformanceRecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PerformanceRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review rating on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Creates a validated rating.
    ///
    /// # Errors
    ///
    /// Returns [`PerformanceDomainError::InvalidRating`] when the value is
    /// outside the 1-5 scale.
    pub const fn new(value: u8) -> Result<Self, PerformanceDomainError> {
        if value == 0 || value > 5 {
            return Err(PerformanceDomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-employee aggregate performance counters.
///
/// One record is expected per employee. The counters mirror the employee's
/// task set by incremental mutation rather than recomputation:
/// `tasks_completed <= tasks_assigned` holds only as long as every
/// assignment precedes its completion and no write is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    id: PerformanceRecordId,
    employee_id: AccountId,
    tasks_assigned: u64,
    tasks_completed: u64,
    rating: Option<Rating>,
    feedback: Option<String>,
    month: String,
    year: i32,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted performance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedPerformanceData {
    /// Persisted record identifier.
    pub id: PerformanceRecordId,
    /// Employee the record belongs to.
    pub employee_id: AccountId,
    /// Persisted assigned-task counter.
    pub tasks_assigned: u64,
    /// Persisted completed-task counter.
    pub tasks_completed: u64,
    /// Persisted review rating, if any.
    pub rating: Option<Rating>,
    /// Persisted review feedback, if any.
    pub feedback: Option<String>,
    /// Persisted month name.
    pub month: String,
    /// Persisted year.
    pub year: i32,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PerformanceRecord {
    /// Creates a zero-counter record stamped with the current month and
    /// year.
    #[must_use]
    pub fn new_zeroed(employee_id: AccountId, clock: &impl Clock) -> Self {
        let now = clock.utc();
        Self {
            id: PerformanceRecordId::new(),
            employee_id,
            tasks_assigned: 0,
            tasks_completed: 0,
            rating: None,
            feedback: None,
            month: month_name(now),
            year: now.year(),
            updated_at: now,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedPerformanceData) -> Self {
        Self {
            id: data.id,
            employee_id: data.employee_id,
            tasks_assigned: data.tasks_assigned,
            tasks_completed: data.tasks_completed,
            rating: data.rating,
            feedback: data.feedback,
            month: data.month,
            year: data.year,
            updated_at: data.updated_at,
        }
    }

    /// Counts a newly assigned task and refreshes the month/year stamp.
    pub fn record_assignment(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.tasks_assigned += 1;
        self.month = month_name(now);
        self.year = now.year();
        self.updated_at = now;
    }

    /// Counts a completed task.
    ///
    /// The month/year stamp is deliberately left untouched: only
    /// assignments move the reporting period forward.
    pub fn record_completion(&mut self, clock: &impl Clock) {
        self.tasks_completed += 1;
        self.updated_at = clock.utc();
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> PerformanceRecordId {
        self.id
    }

    /// Returns the employee this record belongs to.
    #[must_use]
    pub const fn employee_id(&self) -> AccountId {
        self.employee_id
    }

    /// Returns the assigned-task counter.
    #[must_use]
    pub const fn tasks_assigned(&self) -> u64 {
        self.tasks_assigned
    }

    /// Returns the completed-task counter.
    #[must_use]
    pub const fn tasks_completed(&self) -> u64 {
        self.tasks_completed
    }

    /// Returns the review rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Returns the review feedback, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns the English name of the most recent assignment month.
    #[must_use]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Returns the year of the most recent assignment.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Formats the English month name for a timestamp.
fn month_name(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B").to_string()
}
