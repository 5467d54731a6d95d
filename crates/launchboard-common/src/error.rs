//! Selection validation errors.

use thiserror::Error;

/// Raised when an input event carries an invalid selection.
///
/// The event that produced it is rejected outright: the prior selection and
/// both derived outputs stay exactly as they were.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    #[error("unknown launch site: {0}")]
    UnknownSite(String),

    #[error("inverted payload range: low {low} > high {high}")]
    InvertedRange { low: f64, high: f64 },

    #[error("payload range [{low}, {high}] outside slider bounds [0, 10000]")]
    RangeOutOfBounds { low: f64, high: f64 },

    #[error("payload range bound is not a finite number")]
    NonFiniteBound,
}
