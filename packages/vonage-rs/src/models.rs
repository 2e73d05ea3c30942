//! Verify v2 request and response types.

use serde::{Deserialize, Serialize};

/// Delivery channel for a verification workflow step.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Voice,
    Email,
}

/// One step of a verification workflow.
#[derive(Debug, Serialize)]
pub struct WorkflowStep<'a> {
    pub channel: Channel,
    pub to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<&'a str>,
}

/// Body of `POST /v2/verify`.
#[derive(Debug, Serialize)]
pub struct StartVerificationRequest<'a> {
    pub brand: &'a str,
    pub workflow: Vec<WorkflowStep<'a>>,
}

/// Response of `POST /v2/verify`: the opaque id correlating this send
/// with a later check.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationStart {
    pub request_id: String,
    #[serde(default)]
    pub check_url: Option<String>,
}

/// Body of `POST /v2/verify/{request_id}`.
#[derive(Debug, Serialize)]
pub struct CheckCodeRequest<'a> {
    pub code: &'a str,
}

/// RFC 7807 problem body returned on API failures.
#[derive(Debug, Deserialize)]
pub struct ProblemDetails {
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
}
