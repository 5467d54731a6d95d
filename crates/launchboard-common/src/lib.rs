//! launchboard-common — Shared domain types and errors used across all Launchboard crates.

pub mod error;
pub mod records;
pub mod selection;

// Re-export commonly used types
pub use error::SelectionError;
pub use records::LaunchRecord;
pub use selection::{
    PayloadRange, SelectionState, SiteSelector, ALL_SITES_SENTINEL, PAYLOAD_SLIDER_MAX,
    PAYLOAD_SLIDER_MIN,
};
