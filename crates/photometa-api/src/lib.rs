//! # photometa-api
//!
//! HTTP API server for photometa: exposes the photo analysis endpoint plus a
//! health probe. The router and state live here so integration tests can run
//! the app in-process against a mock vision backend.

pub mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use photometa_inference::VisionBackend;

/// Request body size ceiling (base64-encoded images inflate by ~4/3), ~10 MB.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// REQUEST ID (UUIDv7)
// =============================================================================

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically. Useful for
/// log correlation when chasing slow vision calls.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

// =============================================================================
// APPLICATION STATE & ROUTER
// =============================================================================

/// Shared application state.
///
/// Stateless at the request boundary: nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Vision backend; `None` when no model credential is configured.
    pub vision: Option<Arc<dyn VisionBackend>>,
}

/// Build the application router with all middleware layers.
pub fn app(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/analyze-photo", post(handlers::analyze::analyze_photo))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::any())
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuidV7))
        .with_state(state)
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// API error mapped onto the endpoint's HTTP status taxonomy.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Timeout(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<photometa_core::Error> for ApiError {
    fn from(err: photometa_core::Error) -> Self {
        match err {
            photometa_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            photometa_core::Error::Timeout(msg) => ApiError::Timeout(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Timeout(msg) => (StatusCode::REQUEST_TIMEOUT, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError =
            photometa_core::Error::InvalidInput("bad image".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = photometa_core::Error::Timeout("timed out".to_string()).into();
        assert!(matches!(err, ApiError::Timeout(_)));

        let err: ApiError = photometa_core::Error::Inference("upstream".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
