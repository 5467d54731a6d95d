//! API handlers: current datasets out, selection events in.

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};

use launchboard_common::{
    SelectionError, SelectionState, SiteSelector, ALL_SITES_SENTINEL, PAYLOAD_SLIDER_MAX,
    PAYLOAD_SLIDER_MIN,
};
use launchboard_dashboard::DashboardOutputs;

use crate::state::SharedState;

/// Everything the external UI needs to build its selectors: the site
/// dropdown options (sentinel first) and the payload slider geometry.
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
    pub payload_min: f64,
    pub payload_max: f64,
    pub slider_min: f64,
    pub slider_max: f64,
}

/// Current selection plus both chart-ready datasets.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub selection: SelectionState,
    pub outputs: DashboardOutputs,
}

#[derive(Debug, Deserialize)]
pub struct SiteChangeRequest {
    pub site: String,
}

#[derive(Debug, Deserialize)]
pub struct PayloadChangeRequest {
    pub low: f64,
    pub high: f64,
}

/// A rejected selection event, surfaced to the UI as 422 with the
/// validation message. The session state is untouched.
pub struct ApiError(SelectionError);

impl From<SelectionError> for ApiError {
    fn from(err: SelectionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn get_sites(State(state): State<SharedState>) -> Json<SitesResponse> {
    let controller = state.controller.read().await;
    let store = controller.store();
    let (payload_min, payload_max) = store.payload_bounds();

    let mut sites = vec![ALL_SITES_SENTINEL.to_string()];
    sites.extend(store.sites().iter().cloned());

    Json(SitesResponse {
        sites,
        payload_min,
        payload_max,
        slider_min: PAYLOAD_SLIDER_MIN,
        slider_max: PAYLOAD_SLIDER_MAX,
    })
}

pub async fn get_dashboard(State(state): State<SharedState>) -> Json<DashboardView> {
    let controller = state.controller.read().await;
    Json(DashboardView {
        selection: controller.selection().clone(),
        outputs: controller.outputs().clone(),
    })
}

pub async fn post_site(
    State(state): State<SharedState>,
    Json(request): Json<SiteChangeRequest>,
) -> Result<Json<DashboardView>, ApiError> {
    let selector = SiteSelector::parse(&request.site);
    let mut controller = state.controller.write().await;
    controller.on_site_changed(selector)?;
    Ok(Json(DashboardView {
        selection: controller.selection().clone(),
        outputs: controller.outputs().clone(),
    }))
}

pub async fn post_payload(
    State(state): State<SharedState>,
    Json(request): Json<PayloadChangeRequest>,
) -> Result<Json<DashboardView>, ApiError> {
    let mut controller = state.controller.write().await;
    controller.on_payload_range_changed(request.low, request.high)?;
    Ok(Json(DashboardView {
        selection: controller.selection().clone(),
        outputs: controller.outputs().clone(),
    }))
}
