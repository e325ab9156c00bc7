//! Service layer assembling dashboard views from the three contexts.

use crate::account::{
    domain::{AccountId, Role},
    ports::{AccountRepository, AccountRepositoryError},
};
use crate::dashboard::domain::{EmployeeDashboard, EmployerDashboard};
use crate::performance::{
    ports::{PerformanceRepository, PerformanceRepositoryError},
    services::PerformanceLedgerService,
};
use crate::task::{
    domain::TaskStats,
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for dashboard assembly.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Account directory lookup failed.
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),
    /// Task listing failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Ledger lookup failed.
    #[error(transparent)]
    Ledger(#[from] PerformanceRepositoryError),
}

/// Result type for dashboard service operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Read-only dashboard assembly service.
#[derive(Clone)]
pub struct DashboardService<T, A, P, C>
where
    T: TaskRepository,
    A: AccountRepository,
    P: PerformanceRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    accounts: Arc<A>,
    ledger: PerformanceLedgerService<P, C>,
}

impl<T, A, P, C> DashboardService<T, A, P, C>
where
    T: TaskRepository,
    A: AccountRepository,
    P: PerformanceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        accounts: Arc<A>,
        ledger: PerformanceLedgerService<P, C>,
    ) -> Self {
        Self {
            tasks,
            accounts,
            ledger,
        }
    }

    /// Assembles the dashboard for an employee.
    ///
    /// An employee with no stored ledger record gets a default-zero record
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a collaborator lookup fails.
    pub async fn employee_dashboard(
        &self,
        employee_id: AccountId,
    ) -> DashboardResult<EmployeeDashboard> {
        let tasks = self.tasks.list_by_employee(employee_id).await?;
        let performance = self.ledger.get_record(employee_id).await?;
        let stats = TaskStats::from_tasks(&tasks);

        Ok(EmployeeDashboard {
            tasks,
            performance,
            stats,
        })
    }

    /// Assembles the dashboard for an employer.
    ///
    /// The employee list spans the whole directory, and the performance
    /// list spans every stored record; only the task list and statistics
    /// are scoped to tasks this employer assigned.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a collaborator lookup fails.
    pub async fn employer_dashboard(
        &self,
        employer_id: AccountId,
    ) -> DashboardResult<EmployerDashboard> {
        let employees = self.accounts.list_by_role(Role::Employee).await?;
        let tasks = self.tasks.list_by_employer(employer_id).await?;
        let performances = self.ledger.list_records().await?;
        let stats = TaskStats::from_tasks(&tasks);
        let total_employees = employees.len();

        Ok(EmployerDashboard {
            employees,
            tasks,
            performances,
            total_employees,
            stats,
        })
    }
}
