//! Derived task statistics for dashboard views.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Aggregate counts over a set of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    /// Total number of tasks.
    pub total: usize,
    /// Tasks in the `completed` status.
    pub completed: usize,
    /// Tasks in the `pending` status.
    pub pending: usize,
    /// Tasks in the `in-progress` status.
    pub in_progress: usize,
    /// Percentage of tasks completed, rounded to one decimal place.
    pub completion_rate: f64,
}

impl TaskStats {
    /// Computes statistics over a task set.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = count_status(tasks, TaskStatus::Completed);
        let pending = count_status(tasks, TaskStatus::Pending);
        let in_progress = count_status(tasks, TaskStatus::InProgress);

        Self {
            total,
            completed,
            pending,
            in_progress,
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Counts the tasks holding a given status.
fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status() == status).count()
}

/// Percentage of `completed` over `total`, rounded to one decimal place.
///
/// Returns `0.0` for an empty task set.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "completion rate is a display percentage; task counts stay far below the f64 mantissa"
)]
fn completion_rate(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = completed as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}
