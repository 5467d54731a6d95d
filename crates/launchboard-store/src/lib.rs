//! launchboard-store — Immutable in-memory table of launch records.
//!
//! Loads the launch-history CSV once at startup and serves read-only views
//! for the rest of the process lifetime: the ordered record sequence, the
//! set of known launch sites, and the observed payload-mass bounds.
//!
//! Malformed rows (missing or non-numeric payload, missing or out-of-domain
//! `class`, empty site) are skipped individually with a warning; only a
//! source that yields zero usable records is a fatal [`StoreError`].

pub mod error;

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use launchboard_common::{LaunchRecord, PayloadRange, SelectionState, SiteSelector};

pub use error::{Result, StoreError};

/// One CSV row before validation. All fields optional so that a hole in the
/// data surfaces as a skipped row, not a failed load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Flight Number")]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: Option<String>,
    #[serde(rename = "class")]
    class: Option<u8>,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: Option<f64>,
    #[serde(rename = "Booster Version")]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: Option<String>,
}

impl RawRow {
    /// Promote to a [`LaunchRecord`], or explain why the row is unusable.
    fn validate(self) -> std::result::Result<LaunchRecord, &'static str> {
        let launch_site = match self.launch_site {
            Some(site) if !site.trim().is_empty() => site.trim().to_string(),
            _ => return Err("missing launch site"),
        };
        let payload_mass_kg = match self.payload_mass_kg {
            Some(mass) if mass.is_finite() && mass >= 0.0 => mass,
            Some(_) => return Err("negative or non-finite payload mass"),
            None => return Err("missing payload mass"),
        };
        let success = match self.class {
            Some(0) => false,
            Some(1) => true,
            Some(_) => return Err("outcome class not 0 or 1"),
            None => return Err("missing outcome class"),
        };
        Ok(LaunchRecord {
            flight_number: self.flight_number.unwrap_or(0),
            launch_site,
            payload_mass_kg,
            success,
            booster_version: self.booster_version.unwrap_or_default(),
            booster_version_category: self.booster_version_category.unwrap_or_default(),
        })
    }
}

/// Read-only table of parsed launch records.
#[derive(Debug, Clone)]
pub struct LaunchRecordStore {
    records: Vec<LaunchRecord>,
    sites: BTreeSet<String>,
    payload_min: f64,
    payload_max: f64,
    skipped_rows: usize,
}

impl LaunchRecordStore {
    /// Load the store from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading launch records from {:?}", path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the store from any CSV source with the expected header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut records = Vec::new();
        let mut skipped_rows = 0usize;

        for (row_index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
            let raw = match row {
                Ok(raw) => raw,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!("Skipping row {}: {}", row_index + 1, err);
                    skipped_rows += 1;
                    continue;
                }
            };
            match raw.validate() {
                Ok(record) => records.push(record),
                Err(reason) => {
                    warn!("Skipping row {}: {}", row_index + 1, reason);
                    skipped_rows += 1;
                }
            }
        }

        if records.is_empty() {
            return Err(StoreError::NoUsableRows {
                skipped: skipped_rows,
            });
        }

        let sites: BTreeSet<String> = records.iter().map(|r| r.launch_site.clone()).collect();
        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        info!(
            "Launch record store ready: {} records, {} sites, {} rows skipped",
            records.len(),
            sites.len(),
            skipped_rows
        );
        debug!(
            "Observed payload bounds: [{}, {}] kg",
            payload_min, payload_max
        );

        Ok(Self {
            records,
            sites,
            payload_min,
            payload_max,
            skipped_rows,
        })
    }

    /// Full ordered record sequence, in source order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Known launch sites, sorted and deduplicated. The UI builds its
    /// dropdown from this set; event validation checks against it.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    /// Observed (min, max) payload mass across the store, in kg.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Rows dropped during construction.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Session-default selection: all sites, observed payload bounds clamped
    /// into the slider range so the initial handles always sit within the
    /// declared slider span.
    pub fn default_selection(&self) -> SelectionState {
        SelectionState {
            site: SiteSelector::All,
            payload: PayloadRange::clamped(self.payload_min, self.payload_max),
        }
    }
}
