//! Check-verification action

use tracing::{error, info};

use crate::kernel::ServerDeps;

/// Provider error title that identifies a wrong code.
pub const CODE_MISMATCH_TITLE: &str =
    "The code you provided does not match the expected value.";

/// Outcome of checking a code against a request id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Verified,
    /// The provider recognized the request but the code was wrong
    CodeMismatch,
    /// Any other provider failure
    Failed { message: String },
}

/// Check a user-supplied code against an outstanding request id.
///
/// No retries; the provider's own replay semantics apply.
pub async fn check_verification(
    request_id: &str,
    code: &str,
    deps: &ServerDeps,
) -> CheckOutcome {
    info!("Checking code for request ID: {}", request_id);

    match deps.verify.check_code(request_id, code).await {
        Ok(()) => {
            info!("Verification check successful for request: {}", request_id);
            CheckOutcome::Verified
        }
        Err(e) if e.title.as_deref() == Some(CODE_MISMATCH_TITLE) => {
            info!(request_id, "Code mismatch");
            CheckOutcome::CodeMismatch
        }
        Err(e) => {
            error!(error = %e, "Error checking verification");
            CheckOutcome::Failed { message: e.message }
        }
    }
}
