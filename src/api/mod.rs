//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page (selector + five chart panels)
//!
//! ## Charts
//! - `GET /api/v1/charts/:kind?country=` - One panel's Plotly figure
//! - `GET /api/v1/dashboard?country=` - All panels at once
//!
//! ## Data
//! - `GET /api/v1/countries` - Selector options
//! - `GET /api/v1/observations?country=&format=` - Raw rows (json or csv)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use covid_dashboard::api::{serve, AppState};
//! use covid_dashboard::config::Config;
//! use covid_dashboard::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::embedded()?);
//!     let state = AppState::new(dataset, Config::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/charts/:kind", get(routes::charts::get_chart))
        .route("/dashboard", get(routes::charts::get_dashboard))
        .route("/countries", get(routes::countries::list_countries))
        .route("/observations", get(routes::observations::list_observations));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.api);
    let timeout = Duration::from_secs(state.config.api.request_timeout_secs);

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured, otherwise GET from the listed origins
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.api.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("COVID-19 dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{CountryListResponse, HealthResponse, ObservationListResponse};
    use crate::config::Config;
    use crate::dataset::Dataset;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let dataset = Arc::new(Dataset::embedded().unwrap());
        build_router(AppState::new(dataset, Config::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.observations, 6);
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let response = get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("COVID-19 Dashboard with Multiple Charts"));
        assert!(html.contains("id=\"country-dropdown\""));
        assert!(html.contains("<option value=\"United States\" selected>"));
        assert!(html.contains("id=\"choropleth-map\""));
    }

    #[tokio::test]
    async fn test_dashboard_page_selects_configured_default_without_rows() {
        let mut config = Config::default();
        config.dashboard.default_country = "Atlantis".to_string();
        let dataset = Arc::new(Dataset::embedded().unwrap());
        let app = build_router(AppState::new(dataset, config));

        let response = get(app.clone(), "/").await;
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("<option value=\"Atlantis\" selected>"));
        assert!(!html.contains("<option value=\"United States\" selected>"));

        // The chart routes default to the same country
        let response = get(app, "/api/v1/charts/pie").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_countries() {
        let response = get(create_test_app(), "/api/v1/countries").await;
        assert_eq!(response.status(), StatusCode::OK);

        let list: CountryListResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(list.countries, vec!["United States", "India"]);
        assert_eq!(list.default, "United States");
    }

    #[tokio::test]
    async fn test_chart_defaults_to_configured_country() {
        let response = get(create_test_app(), "/api/v1/charts/pie").await;
        assert_eq!(response.status(), StatusCode::OK);

        let figure = body_json(response).await;
        assert_eq!(figure["data"][0]["type"], "pie");
        assert_eq!(figure["data"][0]["values"][0], 24000);
        assert_eq!(figure["data"][0]["values"][1], 25000);
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Active vs Recovered Cases in United States"
        );
    }

    #[tokio::test]
    async fn test_chart_by_panel_id() {
        let response = get(
            create_test_app(),
            "/api/v1/charts/cases-line-chart?country=India",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let figure = body_json(response).await;
        assert_eq!(figure["data"][0]["type"], "scatter");
        assert_eq!(figure["data"][0]["x"][0], "2020-03-01");
        assert_eq!(figure["data"][0]["y"][2], 30000);
    }

    #[tokio::test]
    async fn test_unknown_chart() {
        let response = get(create_test_app(), "/api/v1/charts/radar").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_CHART");
    }

    #[tokio::test]
    async fn test_absent_country_pie_is_not_found() {
        let response = get(create_test_app(), "/api/v1/charts/pie?country=Atlantis").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NO_OBSERVATIONS");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_absent_country_line_is_empty() {
        let response = get(create_test_app(), "/api/v1/charts/line?country=Atlantis").await;
        assert_eq!(response.status(), StatusCode::OK);

        let figure = body_json(response).await;
        assert_eq!(figure["data"][0]["x"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn test_dashboard_lists_unavailable_panels() {
        let response = get(create_test_app(), "/api/v1/dashboard?country=Atlantis").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["country"], "Atlantis");
        assert_eq!(body["figures"].as_object().unwrap().len(), 4);
        assert!(body["unavailable"]["active-recovered-pie-chart"].is_string());
    }

    #[tokio::test]
    async fn test_dashboard_all_panels() {
        let response = get(create_test_app(), "/api/v1/dashboard?country=India").await;
        let body = body_json(response).await;

        assert_eq!(body["figures"].as_object().unwrap().len(), 5);
        assert!(body.get("unavailable").is_none());
    }

    #[tokio::test]
    async fn test_observations_json() {
        let response = get(create_test_app(), "/api/v1/observations?country=India").await;
        assert_eq!(response.status(), StatusCode::OK);

        let list: ObservationListResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(list.total, 3);
        assert!(list.observations.iter().all(|o| o.country == "India"));
    }

    #[tokio::test]
    async fn test_observations_csv() {
        let response = get(create_test_app(), "/api/v1/observations?format=csv").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/csv");

        let csv = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(csv.lines().count(), 7);
    }

    #[tokio::test]
    async fn test_observations_bad_format() {
        let response = get(create_test_app(), "/api/v1/observations?format=xml").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
