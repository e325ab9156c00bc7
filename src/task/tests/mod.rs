//! Test suites for the task lifecycle.

mod service_tests;
