//! Test suites for the account directory.
