//! End-to-end flow over the public API: registration, authentication,
//! assignment, completion, and both dashboards.

use std::sync::Arc;

use chrono::{Duration, Utc};
use eyre::Result;
use mockable::DefaultClock;
use workboard::account::{
    adapters::{jwt::JwtTokenIssuer, memory::InMemoryAccountRepository},
    domain::Role,
    services::{AccountDirectoryService, RegisterAccountRequest},
};
use workboard::dashboard::services::DashboardService;
use workboard::performance::{
    adapters::memory::InMemoryPerformanceRepository, services::PerformanceLedgerService,
};
use workboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskStatus,
    services::{AssignTaskRequest, TaskLifecycleService},
};

struct App {
    directory: AccountDirectoryService<
        InMemoryAccountRepository,
        InMemoryPerformanceRepository,
        JwtTokenIssuer<DefaultClock>,
        DefaultClock,
    >,
    lifecycle: TaskLifecycleService<
        InMemoryTaskRepository,
        InMemoryAccountRepository,
        InMemoryPerformanceRepository,
        DefaultClock,
    >,
    dashboards: DashboardService<
        InMemoryTaskRepository,
        InMemoryAccountRepository,
        InMemoryPerformanceRepository,
        DefaultClock,
    >,
    issuer: JwtTokenIssuer<DefaultClock>,
}

fn build_app() -> App {
    let clock = Arc::new(DefaultClock);
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let performance = Arc::new(InMemoryPerformanceRepository::new());
    let issuer = JwtTokenIssuer::new("integration-test-secret", Arc::clone(&clock));
    let ledger = PerformanceLedgerService::new(performance, Arc::clone(&clock));

    let directory = AccountDirectoryService::new(
        Arc::clone(&accounts),
        ledger.clone(),
        Arc::new(issuer.clone()),
        Arc::clone(&clock),
    );
    let lifecycle = TaskLifecycleService::new(
        Arc::clone(&tasks),
        Arc::clone(&accounts),
        ledger.clone(),
        clock,
    );
    let dashboards = DashboardService::new(tasks, accounts, ledger);

    App {
        directory,
        lifecycle,
        dashboards,
        issuer,
    }
}

#[expect(clippy::float_cmp, reason = "the rate is computed deterministically")]
#[tokio::test(flavor = "multi_thread")]
async fn full_assignment_and_completion_flow() -> Result<()> {
    let app = build_app();

    let employer = app
        .directory
        .register(RegisterAccountRequest::new(
            "Morgan",
            "morgan@example.com",
            "morgan-password",
            Role::Employer,
        ))
        .await?;
    let employee = app
        .directory
        .register(
            RegisterAccountRequest::new(
                "Riley",
                "riley@example.com",
                "riley-password",
                Role::Employee,
            )
            .with_department("Engineering")
            .with_position("Backend Developer"),
        )
        .await?;

    let session = app
        .directory
        .authenticate("riley@example.com", "riley-password", Role::Employee)
        .await?;
    let claims = app.issuer.decode(&session.token)?;
    assert_eq!(claims.sub, employee.id().into_inner());
    assert_eq!(claims.role, "employee");

    let task = app
        .lifecycle
        .assign(AssignTaskRequest::new(
            "Ship the release",
            "Cut the release branch and publish the build",
            employee.id(),
            employer.id(),
            Utc::now() + Duration::days(3),
        ))
        .await?;
    assert_eq!(task.status(), TaskStatus::Pending);

    app.lifecycle
        .set_status(task.id(), TaskStatus::InProgress, employee.id())
        .await?;
    let completed = app
        .lifecycle
        .set_status(task.id(), TaskStatus::Completed, employee.id())
        .await?;
    assert!(completed.completed_at().is_some());

    let employee_view = app.dashboards.employee_dashboard(employee.id()).await?;
    assert_eq!(employee_view.tasks.len(), 1);
    assert_eq!(employee_view.performance.tasks_assigned(), 1);
    assert_eq!(employee_view.performance.tasks_completed(), 1);
    assert_eq!(employee_view.stats.completion_rate, 100.0);

    let employer_view = app.dashboards.employer_dashboard(employer.id()).await?;
    assert_eq!(employer_view.total_employees, 1);
    assert_eq!(employer_view.tasks.len(), 1);
    assert_eq!(employer_view.performances.len(), 1);
    assert_eq!(employer_view.stats.completed, 1);

    Ok(())
}
