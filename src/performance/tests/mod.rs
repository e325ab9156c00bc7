//! Test suites for the performance ledger.

mod ledger_tests;
