//! View types for dashboard assembly.

mod views;

pub use views::{EmployeeDashboard, EmployerDashboard};
