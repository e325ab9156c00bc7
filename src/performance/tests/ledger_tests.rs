//! Service tests for ledger counter maintenance.

use std::sync::Arc;

use crate::account::domain::AccountId;
use crate::performance::{
    adapters::memory::InMemoryPerformanceRepository, ports::PerformanceRepository,
    services::PerformanceLedgerService,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

struct LedgerFixture {
    service: PerformanceLedgerService<InMemoryPerformanceRepository, DefaultClock>,
    repository: Arc<InMemoryPerformanceRepository>,
}

#[fixture]
fn ledger() -> LedgerFixture {
    let repository = Arc::new(InMemoryPerformanceRepository::new());
    let service =
        PerformanceLedgerService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    LedgerFixture {
        service,
        repository,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_record_creates_zeroed_record_once(ledger: LedgerFixture) {
    let employee = AccountId::new();

    ledger
        .service
        .ensure_record(employee)
        .await
        .expect("first call should succeed");
    let first = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");

    ledger
        .service
        .ensure_record(employee)
        .await
        .expect("repeat call should succeed");
    let second = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed")
        .expect("record should still exist");

    assert_eq!(first, second, "repeat calls must not replace the record");
    assert_eq!(first.tasks_assigned(), 0);
    assert_eq!(first.tasks_completed(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn increment_assigned_creates_record_when_absent(ledger: LedgerFixture) {
    let employee = AccountId::new();

    ledger
        .service
        .increment_assigned(employee)
        .await
        .expect("increment should succeed");

    let record = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed")
        .expect("record should have been created");
    assert_eq!(record.tasks_assigned(), 1);
    assert_eq!(record.tasks_completed(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn increment_assigned_updates_existing_record(ledger: LedgerFixture) {
    let employee = AccountId::new();
    ledger
        .service
        .ensure_record(employee)
        .await
        .expect("seeding should succeed");

    ledger
        .service
        .increment_assigned(employee)
        .await
        .expect("first increment should succeed");
    ledger
        .service
        .increment_assigned(employee)
        .await
        .expect("second increment should succeed");

    let record = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.tasks_assigned(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn increment_completed_updates_existing_record(ledger: LedgerFixture) {
    let employee = AccountId::new();
    ledger
        .service
        .increment_assigned(employee)
        .await
        .expect("assignment should succeed");

    ledger
        .service
        .increment_completed(employee)
        .await
        .expect("completion should succeed");

    let record = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed")
        .expect("record should exist");
    assert_eq!(record.tasks_completed(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn increment_completed_skips_missing_record(ledger: LedgerFixture) {
    let employee = AccountId::new();

    ledger
        .service
        .increment_completed(employee)
        .await
        .expect("missing record is logged, not an error");

    let record = ledger
        .repository
        .find_by_employee(employee)
        .await
        .expect("lookup should succeed");
    assert!(record.is_none(), "no record must be created on completion");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_record_falls_back_to_default_zero(ledger: LedgerFixture) {
    let employee = AccountId::new();

    let record = ledger
        .service
        .get_record(employee)
        .await
        .expect("fallback should succeed");

    assert_eq!(record.employee_id(), employee);
    assert_eq!(record.tasks_assigned(), 0);
    assert_eq!(record.tasks_completed(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_records_returns_every_stored_record(ledger: LedgerFixture) {
    let first = AccountId::new();
    let second = AccountId::new();
    ledger
        .service
        .increment_assigned(first)
        .await
        .expect("assignment should succeed");
    ledger
        .service
        .increment_assigned(second)
        .await
        .expect("assignment should succeed");

    let records = ledger
        .service
        .list_records()
        .await
        .expect("listing should succeed");

    assert_eq!(records.len(), 2);
    let employees: Vec<_> = records.iter().map(|record| record.employee_id()).collect();
    assert!(employees.contains(&first));
    assert!(employees.contains(&second));
}
