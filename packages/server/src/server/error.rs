use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// User-facing API errors. Provider internals never leak past these;
/// only the mapped messages below reach the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was missing from the request body
    #[error("{0}")]
    Validation(String),

    /// The OTP provider rejected the code
    #[error("The code you provided is incorrect.")]
    CodeMismatch,

    /// Any other provider failure during a code check
    #[error("An error occurred during verification.")]
    VerificationFailed,

    /// Provider failure while starting a verification
    #[error("Failed to send verification code")]
    SendFailed { details: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::CodeMismatch => StatusCode::BAD_REQUEST,
            ApiError::VerificationFailed | ApiError::SendFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            ApiError::SendFailed { details } => {
                json!({ "error": self.to_string(), "details": details })
            }
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
