//! Service tests for employee and employer dashboard assembly.

use std::sync::Arc;

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::{Account, EmailAddress, PasswordHash, Role},
    ports::AccountRepository,
};
use crate::dashboard::services::DashboardService;
use crate::performance::{
    adapters::memory::InMemoryPerformanceRepository, services::PerformanceLedgerService,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskStatus,
    services::{AssignTaskRequest, TaskLifecycleService},
};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestDashboard = DashboardService<
    InMemoryTaskRepository,
    InMemoryAccountRepository,
    InMemoryPerformanceRepository,
    DefaultClock,
>;

type TestLifecycle = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryAccountRepository,
    InMemoryPerformanceRepository,
    DefaultClock,
>;

struct DashboardFixture {
    dashboard: TestDashboard,
    lifecycle: TestLifecycle,
    accounts: Arc<InMemoryAccountRepository>,
}

#[fixture]
fn dashboards() -> DashboardFixture {
    let clock = Arc::new(DefaultClock);
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let performance = Arc::new(InMemoryPerformanceRepository::new());
    let ledger = PerformanceLedgerService::new(Arc::clone(&performance), Arc::clone(&clock));
    let dashboard = DashboardService::new(
        Arc::clone(&tasks),
        Arc::clone(&accounts),
        ledger.clone(),
    );
    let lifecycle = TaskLifecycleService::new(tasks, Arc::clone(&accounts), ledger, clock);
    DashboardFixture {
        dashboard,
        lifecycle,
        accounts,
    }
}

async fn seed_account(repository: &InMemoryAccountRepository, email: &str, role: Role) -> Account {
    let account = Account::new(
        "Fixture Person",
        EmailAddress::new(email).expect("fixture email should be valid"),
        PasswordHash::from_phc_string("$argon2id$fixture".to_owned()),
        role,
        None,
        None,
        &DefaultClock,
    )
    .expect("fixture account should be valid");
    repository
        .create(&account)
        .await
        .expect("fixture account should persist");
    account
}

fn request(employee: &Account, employer: &Account, title: &str) -> AssignTaskRequest {
    AssignTaskRequest::new(
        title,
        "Dashboard fixture task",
        employee.id(),
        employer.id(),
        Utc::now() + Duration::days(7),
    )
}

#[rstest]
#[expect(clippy::float_cmp, reason = "the rate is computed deterministically")]
#[tokio::test(flavor = "multi_thread")]
async fn employee_dashboard_composes_tasks_ledger_and_stats(dashboards: DashboardFixture) {
    let employee = seed_account(&dashboards.accounts, "worker@example.com", Role::Employee).await;
    let employer = seed_account(&dashboards.accounts, "boss@example.com", Role::Employer).await;

    let first = dashboards
        .lifecycle
        .assign(request(&employee, &employer, "First task"))
        .await
        .expect("assignment should succeed");
    dashboards
        .lifecycle
        .assign(request(&employee, &employer, "Second task"))
        .await
        .expect("assignment should succeed");
    dashboards
        .lifecycle
        .set_status(first.id(), TaskStatus::Completed, employee.id())
        .await
        .expect("completion should succeed");

    let view = dashboards
        .dashboard
        .employee_dashboard(employee.id())
        .await
        .expect("assembly should succeed");

    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.performance.tasks_assigned(), 2);
    assert_eq!(view.performance.tasks_completed(), 1);
    assert_eq!(view.stats.total, 2);
    assert_eq!(view.stats.completed, 1);
    assert_eq!(view.stats.pending, 1);
    assert_eq!(view.stats.completion_rate, 50.0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_dashboard_defaults_to_zero_record(dashboards: DashboardFixture) {
    let employee = seed_account(&dashboards.accounts, "new@example.com", Role::Employee).await;

    let view = dashboards
        .dashboard
        .employee_dashboard(employee.id())
        .await
        .expect("assembly should succeed");

    assert!(view.tasks.is_empty());
    assert_eq!(view.performance.employee_id(), employee.id());
    assert_eq!(view.performance.tasks_assigned(), 0);
    assert_eq!(view.performance.tasks_completed(), 0);
    assert_eq!(view.stats.total, 0);
    assert!(view.stats.completion_rate.abs() < f64::EPSILON);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employer_dashboard_scopes_tasks_but_spans_directory(dashboards: DashboardFixture) {
    let employee = seed_account(&dashboards.accounts, "worker@example.com", Role::Employee).await;
    let other_employee =
        seed_account(&dashboards.accounts, "colleague@example.com", Role::Employee).await;
    let employer = seed_account(&dashboards.accounts, "boss@example.com", Role::Employer).await;
    let other_employer =
        seed_account(&dashboards.accounts, "rival@example.com", Role::Employer).await;

    dashboards
        .lifecycle
        .assign(request(&employee, &employer, "Own task"))
        .await
        .expect("assignment should succeed");
    dashboards
        .lifecycle
        .assign(request(&other_employee, &other_employer, "Rival task"))
        .await
        .expect("assignment should succeed");

    let view = dashboards
        .dashboard
        .employer_dashboard(employer.id())
        .await
        .expect("assembly should succeed");

    // Tasks and statistics are scoped to this employer's assignments.
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.tasks[0].title(), "Own task");
    assert_eq!(view.stats.total, 1);

    // The directory and ledger views span every employee.
    assert_eq!(view.total_employees, 2);
    assert_eq!(view.employees.len(), 2);
    assert!(view.employees.iter().all(|a| a.role() == Role::Employee));
    assert_eq!(view.performances.len(), 2);
}
