//! launchboard-dashboard — The selection controller behind the two charts.
//!
//! Owns the per-session [`SelectionState`], handles the two input events
//! (site changed, payload range changed), and recomputes both chart-ready
//! datasets together on every accepted event so the pie and scatter views
//! are never out of sync with each other.

pub mod controller;
pub mod outputs;

pub use controller::DashboardController;
pub use outputs::{DashboardOutputs, PieOutput, ScatterOutput};
