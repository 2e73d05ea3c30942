//! Integration tests for the verification endpoints.
//!
//! Covers the critical paths:
//! - Field validation before any provider call
//! - Session gating (redirect, never an error response)
//! - Provider failure mapping, including the code-mismatch title

mod common;

use axum::http::StatusCode;
use common::{build_test_app, post_json, TestApp};
use serde_json::json;
use server_core::domains::auth::CODE_MISMATCH_TITLE;
use server_core::kernel::{MockGenerativeModel, MockSessionService, MockVerifyService};

fn authed(verify: MockVerifyService) -> TestApp {
    build_test_app(
        verify,
        MockGenerativeModel::new(),
        MockSessionService::authenticated("user_1"),
    )
}

fn anonymous(verify: MockVerifyService) -> TestApp {
    build_test_app(
        verify,
        MockGenerativeModel::new(),
        MockSessionService::anonymous(),
    )
}

// ============================================================================
// POST /api/send-verification
// ============================================================================

#[tokio::test]
async fn missing_phone_number_returns_400_without_provider_call() {
    let app = authed(MockVerifyService::new());

    let (status, _, body) = post_json(&app.router, "/api/send-verification", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Phone number is required.");
    assert!(app.verify.start_calls().is_empty());
}

#[tokio::test]
async fn empty_phone_number_returns_400_without_provider_call() {
    let app = authed(MockVerifyService::new());

    let (status, _, body) = post_json(
        &app.router,
        "/api/send-verification",
        json!({ "phoneNumber": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Phone number is required.");
    assert!(app.verify.start_calls().is_empty());
}

#[tokio::test]
async fn anonymous_send_redirects_to_sign_in() {
    let app = anonymous(MockVerifyService::new());

    let (status, location, _) = post_json(
        &app.router,
        "/api/send-verification",
        json!({ "phoneNumber": "14155552671" }),
    )
    .await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/sign-in"));
    assert!(app.verify.start_calls().is_empty());
}

#[tokio::test]
async fn send_returns_provider_request_id() {
    let app = authed(MockVerifyService::new().with_start_response("r1"));

    let (status, _, body) = post_json(
        &app.router,
        "/api/send-verification",
        json!({ "phoneNumber": "14155552671" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requestId"], "r1");
    assert_eq!(app.verify.start_calls(), vec!["14155552671".to_string()]);
}

#[tokio::test]
async fn send_provider_failure_returns_500_with_details() {
    let app = authed(
        MockVerifyService::new()
            .with_start_error("Concurrent verifications to the same number are not allowed"),
    );

    let (status, _, body) = post_json(
        &app.router,
        "/api/send-verification",
        json!({ "phoneNumber": "14155552671" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to send verification code");
    assert_eq!(
        body["details"],
        "Concurrent verifications to the same number are not allowed"
    );
}

// ============================================================================
// POST /api/check-verification
// ============================================================================

#[tokio::test]
async fn missing_check_fields_return_400_without_provider_call() {
    let app = authed(MockVerifyService::new());

    for body in [
        json!({}),
        json!({ "requestId": "r1" }),
        json!({ "code": "1234" }),
        json!({ "requestId": "", "code": "1234" }),
        json!({ "requestId": "r1", "code": "" }),
    ] {
        let (status, _, response) =
            post_json(&app.router, "/api/check-verification", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Request ID and code are required.");
    }

    assert!(app.verify.check_calls().is_empty());
}

#[tokio::test]
async fn anonymous_check_redirects_to_sign_in() {
    let app = anonymous(MockVerifyService::new());

    let (status, location, _) = post_json(
        &app.router,
        "/api/check-verification",
        json!({ "requestId": "r1", "code": "1234" }),
    )
    .await;

    assert!(status.is_redirection());
    assert_eq!(location.as_deref(), Some("/sign-in"));
    assert!(app.verify.check_calls().is_empty());
}

#[tokio::test]
async fn valid_code_returns_success_message() {
    let app = authed(MockVerifyService::new().with_check_ok());

    let (status, _, body) = post_json(
        &app.router,
        "/api/check-verification",
        json!({ "requestId": "r1", "code": "1234" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Verification successful!");
    assert_eq!(
        app.verify.check_calls(),
        vec![("r1".to_string(), "1234".to_string())]
    );
}

#[tokio::test]
async fn code_mismatch_returns_400_with_user_message() {
    let app = authed(
        MockVerifyService::new().with_check_error(CODE_MISMATCH_TITLE, "wrong code"),
    );

    let (status, _, body) = post_json(
        &app.router,
        "/api/check-verification",
        json!({ "requestId": "r1", "code": "0000" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The code you provided is incorrect.");
}

#[tokio::test]
async fn other_provider_failure_returns_500_with_generic_message() {
    let app = authed(
        MockVerifyService::new().with_check_error("Request Not Found", "no such request"),
    );

    let (status, _, body) = post_json(
        &app.router,
        "/api/check-verification",
        json!({ "requestId": "gone", "code": "1234" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An error occurred during verification.");
}
