//! Service tests for task assignment, status transitions, and listing.

use std::sync::Arc;

use crate::account::{
    adapters::memory::InMemoryAccountRepository,
    domain::{Account, AccountId, EmailAddress, PasswordHash, Role},
    ports::AccountRepository,
};
use crate::performance::{
    adapters::memory::InMemoryPerformanceRepository,
    domain::PerformanceRecord,
    ports::{PerformanceRepository, PerformanceRepositoryError, PerformanceRepositoryResult},
    services::PerformanceLedgerService,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskDomainError, TaskId, TaskStatus},
    ports::TaskRepository,
    services::{AssignTaskRequest, TaskLifecycleError, TaskLifecycleService},
};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestLifecycle = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryAccountRepository,
    InMemoryPerformanceRepository,
    DefaultClock,
>;

struct LifecycleFixture {
    service: TestLifecycle,
    tasks: Arc<InMemoryTaskRepository>,
    accounts: Arc<InMemoryAccountRepository>,
    performance: Arc<InMemoryPerformanceRepository>,
}

#[fixture]
fn lifecycle() -> LifecycleFixture {
    let clock = Arc::new(DefaultClock);
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let performance = Arc::new(InMemoryPerformanceRepository::new());
    let ledger = PerformanceLedgerService::new(Arc::clone(&performance), Arc::clone(&clock));
    let service = TaskLifecycleService::new(
        Arc::clone(&tasks),
        Arc::clone(&accounts),
        ledger,
        clock,
    );
    LifecycleFixture {
        service,
        tasks,
        accounts,
        performance,
    }
}

// Stored hash is never verified in these tests, so a fixed PHC string
// stands in for a real digest.
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

async fn seed_pair(fixture: &LifecycleFixture) -> (Account, Account) {
    let employee = seed_account(&fixture.accounts, "worker@example.com", Role::Employee).await;
    let employer = seed_account(&fixture.accounts, "boss@example.com", Role::Employer).await;
    (employee, employer)
}

fn assignment_request(employee: &Account, employer: &Account) -> AssignTaskRequest {
    AssignTaskRequest::new(
        "Quarterly report",
        "Compile the quarterly numbers",
        employee.id(),
        employer.id(),
        Utc::now() + Duration::days(7),
    )
}

async fn assigned_counter(
    fixture: &LifecycleFixture,
    employee_id: AccountId,
) -> Option<(u64, u64)> {
    fixture
        .performance
        .find_by_employee(employee_id)
        .await
        .expect("ledger lookup should succeed")
        .map(|record| (record.tasks_assigned(), record.tasks_completed()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_stores_pending_task_and_counts_assignment(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;

    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");

    assert_eq!(task.status(), TaskStatus::Pending);
    assert_eq!(task.assigned_to(), employee.id());
    assert_eq!(task.assigned_by(), employer.id());
    assert_eq!(task.completed_at(), None);

    let stored = lifecycle
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(task));
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 0)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_rejects_unregistered_employee(lifecycle: LifecycleFixture) {
    let (_, employer) = seed_pair(&lifecycle).await;
    let ghost = AccountId::new();

    let request = AssignTaskRequest::new(
        "Quarterly report",
        "Compile the quarterly numbers",
        ghost,
        employer.id(),
        Utc::now() + Duration::days(7),
    );
    let result = lifecycle.service.assign(request).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::EmployeeNotFound(id)) if id == ghost
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assign_rejects_empty_title(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;

    let request = AssignTaskRequest::new(
        "  ",
        "Compile the quarterly numbers",
        employee.id(),
        employer.id(),
        Utc::now() + Duration::days(7),
    );
    let result = lifecycle.service.assign(request).await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle))
    ));
    assert_eq!(
        assigned_counter(&lifecycle, employee.id()).await,
        None,
        "a rejected assignment must not touch the ledger"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_in_progress_leaves_counters_alone(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;
    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");

    let updated = lifecycle
        .service
        .set_status(task.id(), TaskStatus::InProgress, employee.id())
        .await
        .expect("transition should succeed");

    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.completed_at(), None);
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 0)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_stamps_time_and_counts_completion(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;
    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");

    let updated = lifecycle
        .service
        .set_status(task.id(), TaskStatus::Completed, employee.id())
        .await
        .expect("transition should succeed");

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert!(updated.completed_at().is_some());
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recompleting_increments_counter_again(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;
    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");

    lifecycle
        .service
        .set_status(task.id(), TaskStatus::Completed, employee.id())
        .await
        .expect("first completion should succeed");
    lifecycle
        .service
        .set_status(task.id(), TaskStatus::Completed, employee.id())
        .await
        .expect("second completion should succeed");

    // The counter is cumulative over transitions into completed, not a
    // count of distinct completed tasks.
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 2)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_clears_completion_stamp_but_keeps_counter(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;
    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");
    lifecycle
        .service
        .set_status(task.id(), TaskStatus::Completed, employee.id())
        .await
        .expect("completion should succeed");

    let reopened = lifecycle
        .service
        .set_status(task.id(), TaskStatus::Pending, employee.id())
        .await
        .expect("reopening should succeed");

    assert_eq!(reopened.status(), TaskStatus::Pending);
    assert_eq!(reopened.completed_at(), None);
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 1)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_denies_non_assignee_and_leaves_task_unchanged(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;
    let task = lifecycle
        .service
        .assign(assignment_request(&employee, &employer))
        .await
        .expect("assignment should succeed");

    // The assigner is not the assignee, so even the employer is denied.
    let result = lifecycle
        .service
        .set_status(task.id(), TaskStatus::Completed, employer.id())
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::AccessDenied { task_id, caller })
            if task_id == task.id() && caller == employer.id()
    ));

    let stored = lifecycle
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(stored, Some(task), "a denied call must not modify the task");
    assert_eq!(assigned_counter(&lifecycle, employee.id()).await, Some((1, 0)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_rejects_unknown_task(lifecycle: LifecycleFixture) {
    let (employee, _) = seed_pair(&lifecycle).await;
    let unknown = TaskId::new();

    let result = lifecycle
        .service
        .set_status(unknown, TaskStatus::Completed, employee.id())
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::TaskNotFound(id)) if id == unknown
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_return_newest_first(lifecycle: LifecycleFixture) {
    let (employee, employer) = seed_pair(&lifecycle).await;

    let older = persisted_task(
        &employee,
        &employer,
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    );
    let newer = persisted_task(
        &employee,
        &employer,
        Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    );
    lifecycle
        .tasks
        .store(&older)
        .await
        .expect("store should succeed");
    lifecycle
        .tasks
        .store(&newer)
        .await
        .expect("store should succeed");

    let by_employee = lifecycle
        .service
        .list_by_employee(employee.id())
        .await
        .expect("listing should succeed");
    assert_eq!(by_employee, vec![newer.clone(), older.clone()]);

    let by_employer = lifecycle
        .service
        .list_by_employer(employer.id())
        .await
        .expect("listing should succeed");
    assert_eq!(by_employer, vec![newer, older]);
}

fn persisted_task(
    employee: &Account,
    employer: &Account,
    created_at: chrono::DateTime<Utc>,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Ordered fixture".to_owned(),
        description: "Task with a pinned creation time".to_owned(),
        assigned_to: employee.id(),
        assigned_by: employer.id(),
        status: TaskStatus::Pending,
        due_date: created_at + Duration::days(7),
        created_at,
        completed_at: None,
    })
}

mockall::mock! {
    LedgerRepo {}

    #[async_trait]
    impl PerformanceRepository for LedgerRepo {
        async fn insert(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()>;
        async fn update(&self, record: &PerformanceRecord) -> PerformanceRepositoryResult<()>;
        async fn find_by_employee(
            &self,
            employee_id: AccountId,
        ) -> PerformanceRepositoryResult<Option<PerformanceRecord>>;
        async fn list_all(&self) -> PerformanceRepositoryResult<Vec<PerformanceRecord>>;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn ledger_failure_after_store_surfaces_but_keeps_task() {
    let clock = Arc::new(DefaultClock);
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let employee = seed_account(&accounts, "worker@example.com", Role::Employee).await;
    let employer = seed_account(&accounts, "boss@example.com", Role::Employer).await;

    let mut ledger_repo = MockLedgerRepo::new();
    ledger_repo.expect_find_by_employee().returning(|_| {
        Err(PerformanceRepositoryError::persistence(
            std::io::Error::other("ledger connection lost"),
        ))
    });
    let ledger = PerformanceLedgerService::new(Arc::new(ledger_repo), Arc::clone(&clock));
    let service =
        TaskLifecycleService::new(Arc::clone(&tasks), Arc::clone(&accounts), ledger, clock);

    let result = service
        .assign(assignment_request(&employee, &employer))
        .await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Ledger(
            PerformanceRepositoryError::Persistence(_)
        ))
    ));

    // The dual write is not transactional: the task survives the failed
    // counter update.
    let stored = tasks
        .list_by_employee(employee.id())
        .await
        .expect("listing should succeed");
    assert_eq!(stored.len(), 1);
}
