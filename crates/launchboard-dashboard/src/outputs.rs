//! Chart-ready output datasets consumed by the external renderer.

use serde::Serialize;

use launchboard_common::SelectionState;
use launchboard_engine::{pie_title, scatter_title, ScatterPoint};

/// Success/failure ratio dataset for the pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieOutput {
    pub success_count: usize,
    pub failure_count: usize,
    pub title: String,
}

/// Payload-vs-outcome dataset for the scatter chart, order-preserving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterOutput {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

/// Both derived views, always recomputed together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOutputs {
    pub pie: PieOutput,
    pub scatter: ScatterOutput,
}

impl DashboardOutputs {
    /// Zero-count, zero-point outputs with titles for the given selection.
    pub fn empty(selection: &SelectionState) -> Self {
        Self {
            pie: PieOutput {
                success_count: 0,
                failure_count: 0,
                title: pie_title(&selection.site),
            },
            scatter: ScatterOutput {
                title: scatter_title(&selection.site),
                points: Vec::new(),
            },
        }
    }
}
