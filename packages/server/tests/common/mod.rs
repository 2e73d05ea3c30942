//! Shared helpers for integration tests
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::kernel::{
    MockGenerativeModel, MockSessionService, MockVerifyService, NoopSearchService, ServerDeps,
    SuggestionCache,
};
use server_core::server::build_app;
use tower::ServiceExt;

/// The router under test plus handles on its mock dependencies.
pub struct TestApp {
    pub router: Router,
    pub verify: Arc<MockVerifyService>,
    pub model: Arc<MockGenerativeModel>,
    pub cache: Arc<SuggestionCache>,
}

/// Build the real application router around mock providers.
pub fn build_test_app(
    verify: MockVerifyService,
    model: MockGenerativeModel,
    sessions: MockSessionService,
) -> TestApp {
    let verify = Arc::new(verify);
    let model = Arc::new(model);
    let cache = Arc::new(SuggestionCache::new());

    let deps = ServerDeps::new(
        verify.clone(),
        model.clone(),
        Arc::new(sessions),
        Arc::new(NoopSearchService),
        cache.clone(),
    );

    TestApp {
        router: build_app(deps),
        verify,
        model,
        cache,
    }
}

/// POST a JSON body and return (status, Location header, parsed body).
pub async fn post_json(
    router: &Router,
    uri: &str,
    body: Value,
) -> (StatusCode, Option<String>, Value) {
    post_raw(router, uri, body.to_string()).await
}

/// GET a path with (or without) a session token and return
/// (status, Location header, body text).
pub async fn get(
    router: &Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, location, String::from_utf8_lossy(&bytes).to_string())
}

/// POST a raw body (for malformed-payload cases).
pub async fn post_raw(
    router: &Router,
    uri: &str,
    body: String,
) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", "Bearer test-session-token")
        .body(Body::from(body))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, location, json)
}
