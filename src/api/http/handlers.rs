// src/api/http/handlers.rs

use anyhow::Context;
use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;

use crate::api::error::{ApiError, ApiResult};
use crate::config::CONFIG;

/// Readiness probe: the one local resource this service depends on is
/// writable temp storage.
fn service_ready() -> anyhow::Result<()> {
    tempfile::tempfile().context("temp storage unavailable")?;
    Ok(())
}

/// Health check endpoint for system monitoring
pub async fn status_handler() -> Response {
    match service_ready() {
        Ok(()) => Json(json!({
            "status": "OK",
            "message": "Service running smoothly"
        }))
        .into_response(),
        Err(e) => {
            error!("Health check failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "ERROR",
                    "message": "Service experiencing issues"
                })),
            )
                .into_response()
        }
    }
}

/// Detailed health check with service information
pub async fn health_handler() -> Response {
    match service_ready() {
        Ok(()) => Json(json!({
            "status": "healthy",
            "service": CONFIG.service_name,
            "version": env!("CARGO_PKG_VERSION")
        }))
        .into_response(),
        Err(e) => {
            error!("Detailed health check failed: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DivideParams {
    a: Option<String>,
    b: Option<String>,
}

// Operands arrive as raw strings so an unparseable value maps to a 500
// rather than an extractor-level 400.
fn parse_operand(raw: Option<&str>, key: &str, default: f64) -> ApiResult<f64> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| ApiError::internal(format!("invalid value for '{}': {}", key, e))),
        None => Ok(default),
    }
}

/// Division endpoint: `GET /divide?a=<float>&b=<float>`
pub async fn divide_handler(Query(params): Query<DivideParams>) -> ApiResult<Json<Value>> {
    let a = parse_operand(params.a.as_deref(), "a", 0.0)?;
    let b = parse_operand(params.b.as_deref(), "b", 1.0)?;

    if b == 0.0 {
        return Err(ApiError::bad_request("Cannot divide by zero you silly!"));
    }

    Ok(Json(json!({ "result": a / b })))
}

/// Fallback for unknown routes
pub async fn unknown_route_handler() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand_defaults_when_absent() {
        assert_eq!(parse_operand(None, "a", 0.0).unwrap(), 0.0);
        assert_eq!(parse_operand(None, "b", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_parse_operand_trims_whitespace() {
        assert_eq!(parse_operand(Some(" 2.5 "), "a", 0.0).unwrap(), 2.5);
    }

    #[test]
    fn test_parse_operand_rejects_garbage() {
        let err = parse_operand(Some("abc"), "a", 0.0).unwrap_err();
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("'a'"));
    }
}
