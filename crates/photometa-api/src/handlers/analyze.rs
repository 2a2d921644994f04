//! Photo analysis HTTP handler.
//!
//! Request lifecycle: receive → validate → dispatch to the vision model →
//! parse the reply → respond with the parsed JSON verbatim. The endpoint does
//! not validate that the parsed object matches the analysis shape; the
//! prompt is advisory enforcement only, and the client-side fallback is the
//! real safety net against shape drift.

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use photometa_inference::{parse_analysis_json, photo_analysis_prompt};

use crate::{ApiError, AppState};

/// Request body for photo analysis.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzePhotoRequest {
    /// Base64-encoded image data, optionally data-URL-prefixed (required).
    #[serde(default)]
    pub image: Option<String>,
}

/// Plausible base64 payload: nothing outside the base64 character class.
static BASE64_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+/=]+$").expect("base64 class pattern compiles"));

/// Analyze a photo with the configured vision model.
///
/// Accepts a base64-encoded image (bare or as a data URL) and returns the
/// model's structured JSON assessment.
///
/// # Returns
/// - 200 OK with the parsed analysis object
/// - 400 Bad Request if the image field is missing or malformed
/// - 408 Request Timeout when the upstream call exceeds its 30 s budget
/// - 500 Internal Server Error on upstream or parse failure
/// - 503 Service Unavailable when no vision model is configured
#[utoipa::path(post, path = "/api/analyze-photo", tag = "Analysis",
    request_body = AnalyzePhotoRequest,
    responses(
        (status = 200, description = "Structured photo analysis"),
        (status = 400, description = "Missing or malformed image data"),
        (status = 408, description = "Upstream model timed out"),
        (status = 500, description = "Upstream or parsing failure"),
        (status = 503, description = "Vision model not configured"),
    ))]
pub async fn analyze_photo(
    State(state): State<AppState>,
    Json(req): Json<AnalyzePhotoRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let image = match req.image {
        Some(image) if !image.is_empty() => image,
        _ => return Err(ApiError::BadRequest("Image data is required".to_string())),
    };

    if !image.starts_with("data:image") && !BASE64_RE.is_match(&image) {
        return Err(ApiError::BadRequest(
            "Invalid image format. Please provide a valid base64 encoded image.".to_string(),
        ));
    }

    let backend = state.vision.as_ref().ok_or_else(|| {
        ApiError::ServiceUnavailable(
            "Vision model not configured. Set the OPENAI_API_KEY environment variable.".into(),
        )
    })?;

    let content = backend
        .analyze_image(&image, photo_analysis_prompt())
        .await
        .map_err(|e| match e {
            photometa_core::Error::Timeout(_) => {
                warn!("vision call exceeded its time budget");
                ApiError::Timeout(
                    "Request timed out. The image may be too complex or the service is currently busy."
                        .to_string(),
                )
            }
            other => {
                error!(error = %other, "vision dispatch failed");
                ApiError::Internal(format!("Vision API error: {}", other))
            }
        })?;

    let analysis = parse_analysis_json(&content).map_err(|e| {
        error!(error = %e, "model reply was not recoverable JSON");
        ApiError::Internal(e.to_string())
    })?;

    Ok(Json(analysis))
}
