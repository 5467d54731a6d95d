//! Success/failure aggregation for the pie view.

use serde::{Deserialize, Serialize};

use launchboard_common::{LaunchRecord, SiteSelector};

/// Success and failure counts over a filtered record set.
///
/// Always satisfies `success + failure == input length`. An empty input
/// tallies to `{0, 0}`, which is a valid result: the pie degenerates to
/// empty, it does not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub success: usize,
    pub failure: usize,
}

impl OutcomeTally {
    pub fn from_records(records: &[&LaunchRecord]) -> Self {
        let success = records.iter().filter(|r| r.success).count();
        Self {
            success,
            failure: records.len() - success,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.failure
    }
}

/// Pie chart title for the active site selector.
pub fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Launch Success Rate for All Sites".to_string(),
        SiteSelector::Site(name) => format!("Launch Success Rate for {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(success: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: 0,
            launch_site: "CCAFS LC-40".to_string(),
            payload_mass_kg: 500.0,
            success,
            booster_version: String::new(),
            booster_version_category: "v1.0".to_string(),
        }
    }

    #[test]
    fn test_counts_partition_the_input() {
        let records = vec![record(true), record(false), record(true), record(true)];
        let refs: Vec<&LaunchRecord> = records.iter().collect();
        let tally = OutcomeTally::from_records(&refs);
        assert_eq!(tally.success, 3);
        assert_eq!(tally.failure, 1);
        assert_eq!(tally.total(), refs.len());
    }

    #[test]
    fn test_empty_input_tallies_to_zero() {
        let tally = OutcomeTally::from_records(&[]);
        assert_eq!(tally, OutcomeTally { success: 0, failure: 0 });
    }

    #[test]
    fn test_pie_titles() {
        assert_eq!(
            pie_title(&SiteSelector::All),
            "Total Launch Success Rate for All Sites"
        );
        assert_eq!(
            pie_title(&SiteSelector::Site("KSC LC-39A".to_string())),
            "Launch Success Rate for KSC LC-39A"
        );
    }
}
