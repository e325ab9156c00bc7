//! In-memory adapters for task lifecycle tests.

mod task;

pub use task::InMemoryTaskRepository;
