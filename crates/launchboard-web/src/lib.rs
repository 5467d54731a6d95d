//! launchboard-web — JSON API over the dashboard controller.
//!
//! Serves the current chart-ready datasets and accepts the two selection
//! events over HTTP. Chart rendering happens in an external collaborator;
//! this layer only moves datasets and validation errors across the wire.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
