//! Record filtering by site and payload range.

use std::collections::BTreeSet;

use launchboard_common::{LaunchRecord, PayloadRange, SelectionError, SiteSelector};

/// Select records matching a site selector.
///
/// `All` passes every record through in order; a specific site returns
/// exactly the records launched from it. A selector naming a site outside
/// `known_sites` is a validation error, never an empty result.
pub fn filter_by_site<'a>(
    records: &'a [LaunchRecord],
    selector: &SiteSelector,
    known_sites: &BTreeSet<String>,
) -> Result<Vec<&'a LaunchRecord>, SelectionError> {
    match selector {
        SiteSelector::All => Ok(records.iter().collect()),
        SiteSelector::Site(name) => {
            if !known_sites.contains(name) {
                return Err(SelectionError::UnknownSite(name.clone()));
            }
            Ok(records
                .iter()
                .filter(|record| record.launch_site == *name)
                .collect())
        }
    }
}

/// Select records whose payload mass falls within the range, inclusive on
/// both ends. An empty result is a normal outcome, not an error: range
/// validity is guaranteed by the [`PayloadRange`] constructor.
pub fn filter_by_payload<'a>(
    records: &[&'a LaunchRecord],
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.payload_mass_kg))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, success: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: 0,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            success,
            booster_version: String::new(),
            booster_version_category: "v1.0".to_string(),
        }
    }

    fn fixture() -> (Vec<LaunchRecord>, BTreeSet<String>) {
        let records = vec![
            record("CCAFS LC-40", 500.0, true),
            record("KSC LC-39A", 3000.0, false),
            record("KSC LC-39A", 7000.0, true),
            record("VAFB SLC-4E", 9000.0, true),
        ];
        let sites = records.iter().map(|r| r.launch_site.clone()).collect();
        (records, sites)
    }

    #[test]
    fn test_all_selector_passes_everything_through() {
        let (records, sites) = fixture();
        let subset = filter_by_site(&records, &SiteSelector::All, &sites).unwrap();
        assert_eq!(subset.len(), records.len());
        // order preserved, same records
        for (kept, original) in subset.iter().zip(records.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_site_selector_returns_exact_matches() {
        let (records, sites) = fixture();
        let selector = SiteSelector::Site("KSC LC-39A".to_string());
        let subset = filter_by_site(&records, &selector, &sites).unwrap();
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn test_unknown_site_is_an_error_not_empty() {
        let (records, sites) = fixture();
        let selector = SiteSelector::Site("KSC LC-39B".to_string());
        let err = filter_by_site(&records, &selector, &sites).unwrap_err();
        assert_eq!(err, SelectionError::UnknownSite("KSC LC-39B".to_string()));
    }

    #[test]
    fn test_payload_filter_inclusive_both_ends() {
        let (records, sites) = fixture();
        let all = filter_by_site(&records, &SiteSelector::All, &sites).unwrap();
        let range = PayloadRange::new(500.0, 7000.0).unwrap();
        let subset = filter_by_payload(&all, &range);
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.payload_mass_kg >= 500.0));
        assert!(subset.iter().all(|r| r.payload_mass_kg <= 7000.0));
    }

    #[test]
    fn test_payload_filter_point_range() {
        let (records, sites) = fixture();
        let all = filter_by_site(&records, &SiteSelector::All, &sites).unwrap();
        let range = PayloadRange::new(3000.0, 3000.0).unwrap();
        let subset = filter_by_payload(&all, &range);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].payload_mass_kg, 3000.0);
    }

    #[test]
    fn test_payload_filter_empty_result_is_valid() {
        let (records, sites) = fixture();
        let all = filter_by_site(&records, &SiteSelector::All, &sites).unwrap();
        let range = PayloadRange::new(9500.0, 10_000.0).unwrap();
        assert!(filter_by_payload(&all, &range).is_empty());
    }

    #[test]
    fn test_filters_do_not_mutate_input() {
        let (records, sites) = fixture();
        let before = records.clone();
        let all = filter_by_site(&records, &SiteSelector::All, &sites).unwrap();
        let _ = filter_by_payload(&all, &PayloadRange::new(0.0, 100.0).unwrap());
        assert_eq!(records, before);
    }
}
