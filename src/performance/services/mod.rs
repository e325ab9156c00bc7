//! Application services for the performance ledger.

mod ledger;

pub use ledger::PerformanceLedgerService;
