use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use spar_core::{EstimatorConfig, Language};
use spar_web::{create_router, state::AppState};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "spar");
}

#[tokio::test]
async fn test_risk_low() {
    let (status, json) = post_json(
        app(),
        "/api/risk",
        json!({ "duration": 30, "requirements": 10, "developers": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["probability"], 0.1);
    assert_eq!(json["level"], "low");
    assert!(json["suggestion"].as_str().unwrap().contains("Low risk"));
    assert_eq!(json["factors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_risk_boundary_point_four_is_low() {
    let (status, json) = post_json(
        app(),
        "/api/risk",
        json!({ "duration": 100, "requirements": 10, "developers": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["probability"], 0.4);
    assert_eq!(json["level"], "low");
}

#[tokio::test]
async fn test_risk_all_factors_via_legacy_path() {
    let (status, json) = post_json(
        app(),
        "/functions/v1/predictRisk",
        json!({ "duration": 120, "requirements": 45, "developers": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["probability"], 0.9);
    assert_eq!(json["level"], "high");
    assert!(json["suggestion"].as_str().unwrap().contains("High risk"));
    let factors: Vec<&str> = json["factors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["factor"].as_str().unwrap())
        .collect();
    assert_eq!(factors, vec!["long_duration", "many_requirements", "small_team"]);
    assert_eq!(json["factors"][2]["weight"], 0.2);
}

#[tokio::test]
async fn test_risk_uses_configured_language() {
    let config = EstimatorConfig {
        language: Language::Es,
        ..EstimatorConfig::default()
    };
    let (status, json) = post_json(
        create_router(AppState::new(config)),
        "/api/risk",
        json!({ "duration": 100, "requirements": 40, "developers": 4 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["probability"], 0.7);
    assert!(json["suggestion"].as_str().unwrap().contains("Riesgo Medio"));
}

#[tokio::test]
async fn test_risk_missing_field_is_error() {
    let body = json!({ "duration": 30, "requirements": 10 });
    let (status, json) = post_json(app(), "/api/risk", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("developers"));
    assert!(json.get("probability").is_none());
}

#[tokio::test]
async fn test_risk_non_positive_is_error() {
    let (status, json) = post_json(
        app(),
        "/api/risk",
        json!({ "duration": 30, "requirements": 10, "developers": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "invalid_parameter");
    assert!(json["error"].as_str().unwrap().contains("developers"));
}

#[tokio::test]
async fn test_risk_malformed_json_is_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/risk")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["kind"], "bad_request");
}

#[tokio::test]
async fn test_preflight_is_answered() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/risk")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,apikey")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("apikey"));
    assert!(allowed.contains("x-client-info"));
}

#[tokio::test]
async fn test_cross_origin_post_carries_cors_header() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/risk")
                .header(header::ORIGIN, "https://example.com")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"duration":10,"requirements":5,"developers":3}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_schedule_ten_days() {
    let (status, json) = post_json(
        app(),
        "/api/schedule",
        json!({ "totalDuration": 10, "startDate": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["overallEndDate"], "2024-01-10");
    assert_eq!(json["totalScheduledDays"], 10);

    let phases = json["phases"].as_array().unwrap();
    let names: Vec<&str> = phases.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Planning", "Design", "Development", "Testing", "Deployment"]);
    let starts: Vec<&str> = phases.iter().map(|p| p["startDate"].as_str().unwrap()).collect();
    assert_eq!(starts, vec!["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-08", "2024-01-10"]);
    let days: Vec<u64> = phases.iter().map(|p| p["dayCount"].as_u64().unwrap()).collect();
    assert_eq!(days, vec![1, 2, 4, 2, 1]);
}

#[tokio::test]
async fn test_schedule_one_day_keeps_drift() {
    let (status, json) = post_json(
        app(),
        "/api/schedule",
        json!({ "totalDuration": 1, "startDate": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalDuration"], 1);
    assert_eq!(json["totalScheduledDays"], 5);
    assert_eq!(json["overallEndDate"], "2024-01-05");
}

#[tokio::test]
async fn test_schedule_defaults_start_to_today() {
    let (status, json) = post_json(app(), "/api/schedule", json!({ "totalDuration": 20 })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["startDate"].is_string());
    assert_eq!(json["phases"][0]["startDate"], json["startDate"]);
}

#[tokio::test]
async fn test_schedule_rejects_zero_duration() {
    let (status, json) = post_json(
        app(),
        "/api/schedule",
        json!({ "totalDuration": 0, "startDate": "2024-01-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("totalDuration"));
}

#[tokio::test]
async fn test_schedule_rejects_bad_date() {
    let (status, json) = post_json(
        app(),
        "/api/schedule",
        json!({ "totalDuration": 10, "startDate": "2024-13-45" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}
