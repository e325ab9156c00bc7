//! Test suites for dashboard assembly.

mod assembly_tests;
