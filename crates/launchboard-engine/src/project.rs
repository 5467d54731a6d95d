//! Scatter projection for the payload-vs-outcome view.

use serde::{Deserialize, Serialize};

use launchboard_common::{LaunchRecord, SiteSelector};

/// One plottable point: payload mass on the horizontal axis, outcome as 0/1
/// on the vertical axis, booster category for color grouping. The external
/// renderer does the grouping; this is a lossless per-record projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// 0 = failure, 1 = success.
    pub outcome_class: u8,
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome_class(),
            booster_version_category: record.booster_version_category.clone(),
        }
    }
}

/// Project a filtered record set into scatter points, one per record,
/// order preserved. No aggregation.
pub fn project(records: &[&LaunchRecord]) -> Vec<ScatterPoint> {
    records.iter().map(|record| ScatterPoint::from(*record)).collect()
}

/// Scatter chart title for the active site selector.
pub fn scatter_title(selector: &SiteSelector) -> String {
    format!(
        "Scatter Plot of Payload vs. Launch Outcome for {}",
        selector.label()
    )
}
