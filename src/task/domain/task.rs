//! Task aggregate root and status lifecycle types.

use super::{ParseTaskStatusError, TaskDomainError, TaskId};
use crate::account::domain::AccountId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task status lifecycle value.
///
/// No transition table restricts movement between statuses: the observed
/// system lets a task move from any status to any status, including
/// `completed` back to `pending` and repeated re-entry into `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been assigned but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been finished by the assignee.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    assigned_to: AccountId,
    assigned_by: AccountId,
    status: TaskStatus,
    due_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted assignee.
    pub assigned_to: AccountId,
    /// Persisted assigner.
    pub assigned_by: AccountId,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted due date.
    pub due_date: DateTime<Utc>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a newly assigned task in the `pending` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when a required text field is
    /// empty after trimming.
    pub fn new_assignment(
        title: impl Into<String>,
        description: impl Into<String>,
        assigned_to: AccountId,
        assigned_by: AccountId,
        due_date: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            assigned_to,
            assigned_by,
            status: TaskStatus::Pending,
            due_date,
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            assigned_to: data.assigned_to,
            assigned_by: data.assigned_by,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the employee the task is assigned to.
    #[must_use]
    pub const fn assigned_to(&self) -> AccountId {
        self.assigned_to
    }

    /// Returns the employer who assigned the task.
    #[must_use]
    pub const fn assigned_by(&self) -> AccountId {
        self.assigned_by
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if the task is completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Sets the status unconditionally.
    ///
    /// Entering `completed` stamps the completion time; entering any other
    /// status clears it, keeping `completed_at` set exactly when the status
    /// is `completed`.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Completed => Some(clock.utc()),
            TaskStatus::Pending | TaskStatus::InProgress => None,
        };
    }
}
