//! OrderSight analytics dashboard
//!
//! Server-rendered dashboard for order exception root causes: a
//! clickable root-cause table with a drilldown panel, two summary
//! charts, and a tab bar. The dataset is fixed for the process
//! lifetime; the only mutable state is the current row selection.

pub mod charts;
pub mod data;
pub mod drilldown;
pub mod page;
pub mod server;
pub mod table;
pub mod tabs;

pub use data::{root_causes, Breakdown, RootCauseRecord};
pub use drilldown::Selection;
pub use server::{router, AppState, DashboardError};
