//! Application services for dashboard assembly.

mod assembly;

pub use assembly::{DashboardError, DashboardResult, DashboardService};
