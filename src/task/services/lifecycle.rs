//! Service layer for task assignment and status transitions.

use crate::account::{
    domain::AccountId,
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::performance::{
    ports::{PerformanceRepository, PerformanceRepositoryError},
    services::PerformanceLedgerService,
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for assigning a task to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTaskRequest {
    title: String,
    description: String,
    assigned_to: AccountId,
    assigned_by: AccountId,
    due_date: DateTime<Utc>,
}

impl AssignTaskRequest {
    /// Creates a request with all assignment fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assigned_to: AccountId,
        assigned_by: AccountId,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assigned_to,
            assigned_by,
            due_date,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Account directory lookup failed.
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),
    /// Performance ledger mutation failed.
    #[error(transparent)]
    Ledger(#[from] PerformanceRepositoryError),
    /// The assignment target does not resolve to a registered account.
    #[error("employee not found: {0}")]
    EmployeeNotFound(AccountId),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The caller is not the employee the task is assigned to.
    #[error("account {caller} may not modify task {task_id}")]
    AccessDenied {
        /// Task the caller attempted to modify.
        task_id: TaskId,
        /// Account that made the call.
        caller: AccountId,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Owns the two dual writes of the system: task creation plus the assigned
/// counter, and completion plus the completed counter. The writes are not
/// wrapped in a transaction; a ledger failure after the task write commits
/// surfaces as an error while the task change stays in place.
#[derive(Clone)]
pub struct TaskLifecycleService<T, A, P, C>
where
    T: TaskRepository,
    A: AccountRepository,
    P: PerformanceRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    accounts: Arc<A>,
    ledger: PerformanceLedgerService<P, C>,
    clock: Arc<C>,
}

impl<T, A, P, C> TaskLifecycleService<T, A, P, C>
where
    T: TaskRepository,
    A: AccountRepository,
    P: PerformanceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        accounts: Arc<A>,
        ledger: PerformanceLedgerService<P, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            accounts,
            ledger,
            clock,
        }
    }

    /// Assigns a new task to an employee.
    ///
    /// The target must resolve to a registered account; that the assigner
    /// holds the employer role is a precondition the caller layer enforces.
    /// The task is created in the `pending` status and the employee's
    /// assigned counter is incremented.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::EmployeeNotFound`] when the target is
    /// not registered, a domain error when a text field is empty, or a
    /// repository/ledger error when persistence fails. A ledger failure
    /// leaves the already-stored task in place.
    pub async fn assign(&self, request: AssignTaskRequest) -> TaskLifecycleResult<Task> {
        let employee = self
            .accounts
            .find_by_id(request.assigned_to)
            .await?
            .ok_or(TaskLifecycleError::EmployeeNotFound(request.assigned_to))?;

        let task = Task::new_assignment(
            request.title,
            request.description,
            employee.id(),
            request.assigned_by,
            request.due_date,
            &*self.clock,
        )?;

        self.tasks.store(&task).await?;
        self.ledger.increment_assigned(employee.id()).await?;
        Ok(task)
    }

    /// Updates a task's status on behalf of its assignee.
    ///
    /// Only the employee the task is assigned to may move it. Any status is
    /// accepted from any status; entering `completed` stamps the completion
    /// time and increments the employee's completed counter, including when
    /// the task was already completed (the counter is cumulative, not
    /// idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist, [`TaskLifecycleError::AccessDenied`] when the caller is not
    /// the assignee, or a repository/ledger error when persistence fails.
    /// A ledger failure leaves the already-updated task in place.
    pub async fn set_status(
        &self,
        task_id: TaskId,
        new_status: TaskStatus,
        caller: AccountId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))?;

        if task.assigned_to() != caller {
            return Err(TaskLifecycleError::AccessDenied { task_id, caller });
        }

        task.set_status(new_status, &*self.clock);
        self.tasks.update(&task).await?;

        if new_status == TaskStatus::Completed {
            self.ledger.increment_completed(task.assigned_to()).await?;
        }

        Ok(task)
    }

    /// Returns all tasks assigned to the given employee, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_by_employee(
        &self,
        employee_id: AccountId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_by_employee(employee_id).await?)
    }

    /// Returns all tasks assigned by the given employer, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the listing fails.
    pub async fn list_by_employer(
        &self,
        employer_id: AccountId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.tasks.list_by_employer(employer_id).await?)
    }
}
