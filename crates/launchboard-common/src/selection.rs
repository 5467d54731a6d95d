//! Selection parameters: site selector and payload-mass range.

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// Lower bound of the payload slider, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
/// Upper bound of the payload slider, in kg.
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;

/// Sentinel accepted on the wire for [`SiteSelector::All`].
pub const ALL_SITES_SENTINEL: &str = "ALL";

/// Which launch site the operator is looking at.
///
/// Serialized as the site identifier string, with `"ALL"` reserved for the
/// no-filter sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    /// Do not filter by site.
    All,
    /// Only records launched from this site.
    Site(String),
}

impl SiteSelector {
    /// Parse a wire value; `"ALL"` is the sentinel, anything else is a site
    /// identifier (validated against the known-site set at event time, not
    /// here).
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES_SENTINEL {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }

    /// Human-readable label used in chart titles: `"All Sites"` or the site
    /// identifier itself.
    pub fn label(&self) -> &str {
        match self {
            SiteSelector::All => "All Sites",
            SiteSelector::Site(name) => name,
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        SiteSelector::parse(&value)
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> String {
        match selector {
            SiteSelector::All => ALL_SITES_SENTINEL.to_string(),
            SiteSelector::Site(name) => name,
        }
    }
}

/// Inclusive payload-mass range in kg.
///
/// The constructor enforces `PAYLOAD_SLIDER_MIN <= low <= high <=
/// PAYLOAD_SLIDER_MAX`, so a held `PayloadRange` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, SelectionError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(SelectionError::NonFiniteBound);
        }
        if low > high {
            return Err(SelectionError::InvertedRange { low, high });
        }
        if low < PAYLOAD_SLIDER_MIN || high > PAYLOAD_SLIDER_MAX {
            return Err(SelectionError::RangeOutOfBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// Build a range from data-derived bounds, clamping both ends into the
    /// slider bounds. Used for the session default, where the observed
    /// min/max payload may lie outside the declared slider range.
    pub fn clamped(low: f64, high: f64) -> Self {
        let low = low.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        let high = high.clamp(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX);
        // clamp preserves ordering, so low <= high still holds
        Self {
            low: low.min(high),
            high,
        }
    }

    /// The full slider span.
    pub fn full() -> Self {
        Self {
            low: PAYLOAD_SLIDER_MIN,
            high: PAYLOAD_SLIDER_MAX,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

/// The two user-controlled selection parameters for one session.
///
/// Owned by the dashboard controller and updated only through its validated
/// event handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub site: SiteSelector,
    pub payload: PayloadRange,
}

impl SelectionState {
    /// Session default: all sites, full slider span.
    pub fn all_sites() -> Self {
        Self {
            site: SiteSelector::All,
            payload: PayloadRange::full(),
        }
    }
}
