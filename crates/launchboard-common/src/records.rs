//! The launch record domain type.

use serde::{Deserialize, Serialize};

/// One historical rocket launch.
///
/// Records are parsed once at startup and never mutated afterwards. Every
/// derived view (filtered subsets, outcome tallies, scatter projections) is
/// computed fresh from the full record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number from the source data. Carried through for
    /// identification in API payloads; no filter reads it.
    pub flight_number: u32,
    /// Launch site identifier, e.g. "CCAFS LC-40". One of a finite known set.
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Launch outcome: true = success (CSV `class` column value 1).
    pub success: bool,
    /// Full booster label, e.g. "F9 v1.0  B0003".
    pub booster_version: String,
    /// Booster family label used for scatter-plot color grouping, e.g. "v1.0".
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Outcome as the 0/1 value plotted on the scatter vertical axis.
    pub fn outcome_class(&self) -> u8 {
        u8::from(self.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(success: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: 1,
            launch_site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            success,
            booster_version: "F9 v1.0  B0003".to_string(),
            booster_version_category: "v1.0".to_string(),
        }
    }

    #[test]
    fn test_outcome_class_maps_bool_to_01() {
        assert_eq!(record(true).outcome_class(), 1);
        assert_eq!(record(false).outcome_class(), 0);
    }
}
