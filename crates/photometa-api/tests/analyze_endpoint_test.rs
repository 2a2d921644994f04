//! Integration tests for the photo analysis HTTP endpoint.
//!
//! Runs the router in-process on an ephemeral port with a mock vision
//! backend, exercising the endpoint's full status taxonomy over real HTTP:
//! - 400 for missing or malformed image data
//! - 408 for upstream timeout
//! - 500 for upstream failure or unrecoverable model replies
//! - 503 when no vision model is configured
//! - 200 with the parsed model reply verbatim

use std::sync::Arc;

use photometa_api::{app, AppState};
use photometa_inference::mock::{MockFailure, MockVisionBackend};
use photometa_inference::VisionBackend;

/// A syntactically complete analysis reply, as the prompt demands.
const VALID_ANALYSIS: &str = r#"{
    "photoContent": {
        "mainSubject": "Group of students",
        "description": "Students in gowns holding diplomas.",
        "occasion": "Graduation",
        "confidence": "High"
    },
    "temporalContext": {
        "timeOfDay": "Afternoon",
        "probableYear": "2020s",
        "season": "Spring",
        "dayType": "Weekday"
    },
    "locationContext": {
        "environment": "Outdoor",
        "probablePlace": "University campus",
        "probableCity": "Boston",
        "culturalIndicators": "Academic regalia"
    },
    "visualElements": {
        "dominantColors": ["black", "red", "white"],
        "lighting": "Natural daylight",
        "composition": "Amateur, casual",
        "peopleCount": "6"
    },
    "socialContext": {
        "groupDynamics": "Friends",
        "activity": "Celebrating",
        "mood": "Joyful",
        "formalityLevel": "Semi-formal"
    }
}"#;

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_app(vision: Option<Arc<dyn VisionBackend>>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState { vision };

    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

fn backend(mock: MockVisionBackend) -> Option<Arc<dyn VisionBackend>> {
    Some(Arc::new(mock))
}

async fn post_analyze(base_url: &str, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/analyze-photo", base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn missing_image_field_is_rejected() {
    let base_url = spawn_app(backend(MockVisionBackend::new(VALID_ANALYSIS))).await;

    let response = post_analyze(&base_url, serde_json::json!({})).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Image data is required");
}

#[tokio::test]
async fn empty_image_field_is_rejected() {
    let base_url = spawn_app(backend(MockVisionBackend::new(VALID_ANALYSIS))).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "" })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Image data is required");
}

#[tokio::test]
async fn implausible_base64_is_rejected() {
    let base_url = spawn_app(backend(MockVisionBackend::new(VALID_ANALYSIS))).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "not-base64-!!" })).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid image format"));
}

#[tokio::test]
async fn valid_payload_returns_parsed_reply_verbatim() {
    let mock = MockVisionBackend::new(VALID_ANALYSIS);
    let base_url = spawn_app(backend(mock.clone())).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let expected: serde_json::Value = serde_json::from_str(VALID_ANALYSIS).unwrap();
    assert_eq!(body, expected);

    // The endpoint forwards the payload as received; data-URL prefixing is
    // the backend's concern.
    assert_eq!(mock.dispatched(), vec!["QUJDRA==".to_string()]);
}

#[tokio::test]
async fn data_url_payload_is_accepted() {
    let base_url = spawn_app(backend(MockVisionBackend::new(VALID_ANALYSIS))).await;

    let response = post_analyze(
        &base_url,
        serde_json::json!({ "image": "data:image/png;base64,QUJDRA==" }),
    )
    .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn upstream_timeout_maps_to_408() {
    let base_url = spawn_app(backend(MockVisionBackend::failing(MockFailure::Timeout))).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 408);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Request timed out."));
}

#[tokio::test]
async fn upstream_failure_maps_to_500_with_message() {
    let base_url = spawn_app(backend(MockVisionBackend::failing(MockFailure::Upstream(
        "model is overloaded".to_string(),
    ))))
    .await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("model is overloaded"));
}

#[tokio::test]
async fn prose_wrapped_reply_is_recovered() {
    let reply = format!("Sure! Here is the JSON you asked for:\n{}\nAnything else?", VALID_ANALYSIS);
    let base_url = spawn_app(backend(MockVisionBackend::new(reply))).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["photoContent"]["occasion"], "Graduation");
}

#[tokio::test]
async fn reply_without_json_defaults_to_empty_object() {
    let base_url = spawn_app(backend(MockVisionBackend::new(
        "I cannot analyze this image.",
    )))
    .await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn unrecoverable_reply_maps_to_500() {
    let base_url = spawn_app(backend(MockVisionBackend::new("{\"broken\": }"))).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn missing_backend_maps_to_503() {
    let base_url = spawn_app(None).await;

    let response = post_analyze(&base_url, serde_json::json!({ "image": "QUJDRA==" })).await;
    assert_eq!(response.status(), 503);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Vision model not configured"));
}

#[tokio::test]
async fn health_reports_vision_model() {
    let base_url = spawn_app(backend(MockVisionBackend::new(VALID_ANALYSIS))).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["vision_model"], "mock-vision");
}

#[tokio::test]
async fn health_without_backend_reports_no_model() {
    let base_url = spawn_app(None).await;

    let response = reqwest::get(format!("{}/health", base_url)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["vision_model"].is_null());
}
