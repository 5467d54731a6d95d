//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{get_dashboard, get_sites, health, post_payload, post_site};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health))
        .route("/api/sites", get(get_sites))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/selection/site", post(post_site))
        .route("/api/selection/payload", post(post_payload))
        // the chart renderer may be served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc as StdArc;
    use tower::ServiceExt;

    use launchboard_dashboard::DashboardController;
    use launchboard_store::LaunchRecordStore;

    const CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,1,500.0,F9 v1.0  B0003,v1.0
2,KSC LC-39A,0,3000.0,F9 v1.1  B1011,v1.1
3,KSC LC-39A,1,7000.0,F9 v1.1  B1014,v1.1
4,VAFB SLC-4E,1,9000.0,F9 v1.2  B1036,v1.2
";

    fn app() -> Router {
        let store = LaunchRecordStore::from_reader(CSV.as_bytes()).unwrap();
        let controller = DashboardController::new(StdArc::new(store));
        build_router(AppState::new(controller))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_serves_current_outputs() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["outputs"]["pie"]["success_count"], 3);
        assert_eq!(json["outputs"]["pie"]["failure_count"], 1);
        assert_eq!(json["outputs"]["scatter"]["points"].as_array().unwrap().len(), 4);
        assert_eq!(json["selection"]["site"], "ALL");
    }

    #[tokio::test]
    async fn test_sites_lists_sentinel_first() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/sites")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let sites = json["sites"].as_array().unwrap();
        assert_eq!(sites[0], "ALL");
        assert_eq!(sites.len(), 4);
        assert_eq!(json["payload_min"], 500.0);
        assert_eq!(json["payload_max"], 9000.0);
    }

    #[tokio::test]
    async fn test_site_event_recomputes_outputs() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/selection/site")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"site":"KSC LC-39A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["outputs"]["pie"]["success_count"], 1);
        assert_eq!(json["outputs"]["pie"]["failure_count"], 1);
        assert_eq!(
            json["outputs"]["pie"]["title"],
            "Launch Success Rate for KSC LC-39A"
        );
    }

    #[tokio::test]
    async fn test_invalid_selection_is_422() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/selection/payload")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"low":9000.0,"high":100.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("inverted"));
    }
}
