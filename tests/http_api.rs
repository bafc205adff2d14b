// tests/http_api.rs

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use vitals::api::http::create_router;

/// Fire a GET at a fresh router and return status plus parsed JSON body.
async fn get(uri: &str) -> (StatusCode, Value) {
    let app = create_router();

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_status_endpoint() {
    let (status, body) = get("/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Service running smoothly");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(
        !body["service"].as_str().unwrap_or_default().is_empty(),
        "health response should carry a service name"
    );
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_divide_happy_path() {
    let (status, body) = get("/divide?a=10&b=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn test_divide_negative_and_fractional() {
    let (status, body) = get("/divide?a=-7.5&b=2.5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(-3.0));
}

#[tokio::test]
async fn test_divide_by_zero_is_rejected() {
    let (status, body) = get("/divide?a=1&b=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot divide by zero you silly!");
}

#[tokio::test]
async fn test_divide_non_numeric_operand() {
    let (status, body) = get("/divide?a=abc&b=2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        !body["error"].as_str().unwrap_or_default().is_empty(),
        "parse failures should surface a non-empty error message"
    );
}

#[tokio::test]
async fn test_divide_missing_params_use_defaults() {
    // a defaults to 0, b defaults to 1
    let (status, body) = get("/divide").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_unknown_route_returns_404_body() {
    let (status, body) = get("/definitely-not-a-route").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}
