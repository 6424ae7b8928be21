//! HTTP API for the dashboard, predictions, and health checks

use aquasense_lib::{
    health::{ComponentStatus, HealthRegistry},
    PredictionError, PredictionPipeline, PredictionRequest,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// The one dashboard page; its selects are populated from `/api/options`
const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
    pub years: Vec<i32>,
    pub health: HealthRegistry,
}

impl AppState {
    pub fn new(pipeline: Arc<PredictionPipeline>, years: Vec<i32>, health: HealthRegistry) -> Self {
        Self {
            pipeline,
            years,
            health,
        }
    }
}

/// Selectable choices rendered by the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub regions: Vec<String>,
    pub years: Vec<i32>,
}

/// Successful prediction response
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub region: String,
    pub year: i32,
    pub rainfall_mm: f64,
    pub category: String,
    pub summary: String,
}

/// Per-request failure, as a single human-readable message
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serve the dashboard page
async fn dashboard() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// List the selectable regions and years
async fn options(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(OptionsResponse {
        regions: state.pipeline.regions().to_vec(),
        years: state.years.clone(),
    })
}

/// Run one prediction
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> impl IntoResponse {
    match state.pipeline.predict(&request) {
        Ok(result) => {
            info!(
                region = %request.region,
                year = request.year,
                rainfall_mm = result.rainfall_mm,
                category = %result.category,
                "Prediction served"
            );

            let summary = format!(
                "The predicted average rainfall in {} for {} is {:.2} mm. \
                 This is categorized as a '{}' situation.",
                request.region, request.year, result.rainfall_mm, result.category
            );

            (
                StatusCode::OK,
                Json(PredictResponse {
                    region: request.region,
                    year: request.year,
                    rainfall_mm: result.rainfall_mm,
                    category: result.category.to_string(),
                    summary,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                region = %request.region,
                year = request.year,
                error = %err,
                "Prediction failed"
            );

            let status = match err {
                PredictionError::UnknownRegion(_) => StatusCode::UNPROCESSABLE_ENTITY,
                PredictionError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };

            (
                status,
                Json(ErrorResponse {
                    error: format!("Error: {err}"),
                }),
            )
                .into_response()
        }
    }
}

/// Health check response - returns 200 if healthy, 503 if unhealthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health.health().await;

    let status_code = match health.status {
        ComponentStatus::Healthy | ComponentStatus::Degraded => StatusCode::OK,
        ComponentStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

/// Readiness check response - returns 200 once artifacts are loaded
async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let readiness = state.health.readiness().await;

    let status_code = if readiness.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(readiness))
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/options", get(options))
        .route("/api/predict", post(predict))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .with_state(state)
}

/// Start the API server
pub async fn serve(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
