//! Dashboard view aggregates returned to the request layer.

use crate::account::domain::Account;
use crate::performance::domain::PerformanceRecord;
use crate::task::domain::{Task, TaskStats};
use serde::{Deserialize, Serialize};

/// Everything an employee's dashboard presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDashboard {
    /// The employee's tasks, newest first.
    pub tasks: Vec<Task>,
    /// The employee's ledger record, default-zero when none is stored.
    pub performance: PerformanceRecord,
    /// Statistics derived from the employee's tasks.
    pub stats: TaskStats,
}

/// Everything an employer's dashboard presents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerDashboard {
    /// Every registered employee account.
    pub employees: Vec<Account>,
    /// Tasks this employer assigned, newest first.
    pub tasks: Vec<Task>,
    /// Every stored performance record.
    pub performances: Vec<PerformanceRecord>,
    /// Number of registered employees.
    pub total_employees: usize,
    /// Statistics derived from the employer's tasks.
    pub stats: TaskStats,
}
