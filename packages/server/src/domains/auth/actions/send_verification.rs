//! Start-verification action

use tracing::{error, info};

use crate::kernel::{ProviderError, ServerDeps, VerificationStart};

/// Ask the provider to start an SMS verification for a phone number.
///
/// Side effect at the provider: an outbound code send. Not idempotent;
/// repeated calls for the same number each send a new code.
pub async fn send_verification(
    phone_number: &str,
    deps: &ServerDeps,
) -> Result<VerificationStart, ProviderError> {
    info!("Sending verification to: {}", phone_number);

    let start = deps
        .verify
        .start_verification(phone_number)
        .await
        .map_err(|e| {
            error!(error = %e, "Error sending verification");
            e
        })?;

    info!(request_id = %start.request_id, "Verification started");
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{
        MockGenerativeModel, MockSessionService, MockVerifyService, NoopSearchService,
        SuggestionCache,
    };
    use std::sync::Arc;

    fn deps(verify: MockVerifyService) -> (Arc<MockVerifyService>, ServerDeps) {
        let verify = Arc::new(verify);
        let deps = ServerDeps::new(
            verify.clone(),
            Arc::new(MockGenerativeModel::new()),
            Arc::new(MockSessionService::anonymous()),
            Arc::new(NoopSearchService),
            Arc::new(SuggestionCache::new()),
        );
        (verify, deps)
    }

    #[tokio::test]
    async fn returns_provider_request_id() {
        let (verify, deps) = deps(MockVerifyService::new().with_start_response("r1"));

        let start = send_verification("14155552671", &deps).await.unwrap();

        assert_eq!(start.request_id, "r1");
        assert_eq!(verify.start_calls(), vec!["14155552671".to_string()]);
    }

    #[tokio::test]
    async fn propagates_provider_failure() {
        let (_, deps) = deps(MockVerifyService::new().with_start_error("Concurrent verifications"));

        let err = send_verification("14155552671", &deps).await.unwrap_err();

        assert_eq!(err.message, "Concurrent verifications");
    }
}
