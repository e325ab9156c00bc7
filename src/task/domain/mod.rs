//! Domain model for task lifecycle management.
//!
//! The task domain models assignment from an employer to an employee, the
//! pending / in-progress / completed status lifecycle, and the derived
//! statistics dashboards present, while keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod stats;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use stats::TaskStats;
pub use task::{PersistedTaskData, Task, TaskStatus};
