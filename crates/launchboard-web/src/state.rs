//! Shared application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use launchboard_dashboard::DashboardController;

/// Shared state injected into every Axum handler.
///
/// One controller, one selection session. Selection events take the write
/// lock, so recomputations never overlap and a reader always sees outputs
/// from a completed event.
pub struct AppState {
    pub controller: RwLock<DashboardController>,
}

impl AppState {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller: RwLock::new(controller),
        }
    }
}

pub type SharedState = Arc<AppState>;
