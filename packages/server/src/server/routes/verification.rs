use axum::{
    extract::rejection::JsonRejection,
    extract::Extension,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domains::auth::{check_verification, send_verification, CheckOutcome};
use crate::kernel::ServerDeps;
use crate::server::error::ApiError;
use crate::server::middleware::AuthContext;

/// Where unauthenticated callers are sent.
pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    #[serde(default)]
    phone_number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendVerificationResponse {
    request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_url: Option<String>,
}

/// `POST /api/send-verification`
///
/// Starts a verification workflow for the phone number in the body and
/// returns the provider's request id for the later check.
pub async fn send_verification_handler(
    Extension(deps): Extension<ServerDeps>,
    Extension(AuthContext(user)): Extension<AuthContext>,
    payload: Result<Json<SendVerificationRequest>, JsonRejection>,
) -> Response {
    if user.is_none() {
        return Redirect::to(SIGN_IN_PATH).into_response();
    }

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return ApiError::SendFailed {
                details: rejection.to_string(),
            }
            .into_response()
        }
    };

    let phone_number = body.phone_number.unwrap_or_default();
    if phone_number.is_empty() {
        return ApiError::Validation("Phone number is required.".to_string()).into_response();
    }

    match send_verification(&phone_number, &deps).await {
        Ok(start) => Json(SendVerificationResponse {
            request_id: start.request_id,
            check_url: start.check_url,
        })
        .into_response(),
        Err(e) => ApiError::SendFailed { details: e.message }.into_response(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVerificationRequest {
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// `POST /api/check-verification`
///
/// Validates a user-supplied code against an outstanding request id and
/// maps provider failures to the small set of user-facing outcomes.
pub async fn check_verification_handler(
    Extension(deps): Extension<ServerDeps>,
    Extension(AuthContext(user)): Extension<AuthContext>,
    payload: Result<Json<CheckVerificationRequest>, JsonRejection>,
) -> Response {
    if user.is_none() {
        return Redirect::to(SIGN_IN_PATH).into_response();
    }

    let body = match payload {
        Ok(Json(body)) => body,
        Err(_) => return ApiError::VerificationFailed.into_response(),
    };

    let (request_id, code) = match (non_empty(body.request_id), non_empty(body.code)) {
        (Some(request_id), Some(code)) => (request_id, code),
        _ => {
            return ApiError::Validation("Request ID and code are required.".to_string())
                .into_response()
        }
    };

    match check_verification(&request_id, &code, &deps).await {
        CheckOutcome::Verified => {
            Json(json!({ "message": "Verification successful!" })).into_response()
        }
        CheckOutcome::CodeMismatch => ApiError::CodeMismatch.into_response(),
        CheckOutcome::Failed { .. } => ApiError::VerificationFailed.into_response(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
