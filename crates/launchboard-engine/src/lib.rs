//! launchboard-engine — Pure filtering, aggregation, and projection over
//! launch records.
//!
//! Everything here is deterministic and side-effect free: functions take
//! record slices and validated selection parameters, and return fresh
//! derived values. No function mutates its input.

pub mod aggregate;
pub mod filter;
pub mod project;

pub use aggregate::{pie_title, OutcomeTally};
pub use filter::{filter_by_payload, filter_by_site};
pub use project::{project, scatter_title, ScatterPoint};
