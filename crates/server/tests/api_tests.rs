//! Integration tests for the server API endpoints

use aquasense_lib::{
    health::{components, HealthRegistry},
    FeatureVector, PredictionPipeline, RainfallModel, RegionEncoder,
};
use aquasense_server::api::{self, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Model stub that always emits the same raw output
struct FixedModel(f64);

impl RainfallModel for FixedModel {
    fn predict(&self, _features: &FeatureVector) -> anyhow::Result<f64> {
        Ok(self.0)
    }
}

/// Model stub that always fails, as a corrupt artifact would
struct FailingModel;

impl RainfallModel for FailingModel {
    fn predict(&self, _features: &FeatureVector) -> anyhow::Result<f64> {
        anyhow::bail!("input shape mismatch")
    }
}

fn sample_encoder() -> RegionEncoder {
    RegionEncoder::new(vec![
        "Goa".to_string(),
        "Kolkata".to_string(),
        "Meghalaya".to_string(),
        "Mizoram".to_string(),
    ])
}

async fn setup_test_app(model: Box<dyn RainfallModel>) -> (Router, Arc<AppState>) {
    let pipeline = Arc::new(PredictionPipeline::new(model, sample_encoder()));

    let health = HealthRegistry::new();
    health.register(components::MODEL).await;
    health.register(components::ENCODER).await;

    let state = Arc::new(AppState::new(pipeline, vec![2023, 2024], health));
    let router = api::create_router(state.clone());

    (router, state)
}

fn predict_request(region: &str, year: i32) -> Request<Body> {
    let body = serde_json::json!({ "region": region, "year": year });
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_dashboard_page_served_at_root() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let page = String::from_utf8(body.to_vec()).unwrap();

    assert!(page.contains("AquaSense"));
    assert!(page.contains("Predict Rainfall"));
}

#[tokio::test]
async fn test_options_lists_regions_and_years() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let options = json_body(response).await;
    assert_eq!(
        options["regions"],
        serde_json::json!(["Goa", "Kolkata", "Meghalaya", "Mizoram"])
    );
    assert_eq!(options["years"], serde_json::json!([2023, 2024]));
}

#[tokio::test]
async fn test_predict_returns_classified_estimate() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(5.0))).await;

    let response = app.oneshot(predict_request("Goa", 2023)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["region"], "Goa");
    assert_eq!(body["year"], 2023);
    assert_eq!(body["rainfall_mm"], 50.0);
    assert_eq!(body["category"], "Drought");
    assert_eq!(
        body["summary"],
        "The predicted average rainfall in Goa for 2023 is 50.00 mm. \
         This is categorized as a 'Drought' situation."
    );
}

#[tokio::test]
async fn test_predict_threshold_boundary_is_normal() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(7.4))).await;

    let response = app.oneshot(predict_request("Kolkata", 2024)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["rainfall_mm"], 74.0);
    assert_eq!(body["category"], "Normal");
}

#[tokio::test]
async fn test_predict_unknown_region_returns_error_message() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    let response = app.oneshot(predict_request("Delhi", 2023)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Error: unknown region 'Delhi'");
}

#[tokio::test]
async fn test_predict_inference_failure_returns_error_message() {
    let (app, _state) = setup_test_app(Box::new(FailingModel)).await;

    let response = app.oneshot(predict_request("Goa", 2023)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Error: inference failed"));
}

#[tokio::test]
async fn test_healthz_returns_ok_when_healthy() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health = json_body(response).await;
    assert_eq!(health["status"], "healthy");
    assert!(health["components"]["model"].is_object());
    assert!(health["components"]["encoder"].is_object());
}

#[tokio::test]
async fn test_readyz_returns_503_before_artifacts_load() {
    let (app, _state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let readiness = json_body(response).await;
    assert_eq!(readiness["ready"], false);
}

#[tokio::test]
async fn test_readyz_returns_ok_when_ready() {
    let (app, state) = setup_test_app(Box::new(FixedModel(9.0))).await;

    state.health.set_ready(true).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/readyz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let readiness = json_body(response).await;
    assert_eq!(readiness["ready"], true);
}
