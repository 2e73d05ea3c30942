//! Server dependencies for handlers (using traits for testability)
//!
//! This module provides the central dependency container injected into all
//! route handlers. All external services use trait abstractions to enable
//! testing.

use std::sync::Arc;

use async_trait::async_trait;
use vonage::{VonageError, VonageService};

use crate::kernel::cache::SuggestionCache;
use crate::kernel::{
    BaseGenerativeModel, BaseSearchService, BaseSessionService, BaseVerifyService, ProviderError,
    VerificationStart,
};

// =============================================================================
// VonageService Adapter (implements BaseVerifyService trait)
// =============================================================================

/// Wrapper around VonageService that implements BaseVerifyService trait
pub struct VonageAdapter(pub Arc<VonageService>);

impl VonageAdapter {
    pub fn new(service: Arc<VonageService>) -> Self {
        Self(service)
    }
}

fn provider_error(error: VonageError) -> ProviderError {
    match error {
        VonageError::Api { title, detail, .. } => ProviderError {
            message: detail.unwrap_or_else(|| title.clone()),
            title: Some(title),
        },
        other => ProviderError::new(other.to_string()),
    }
}

#[async_trait]
impl BaseVerifyService for VonageAdapter {
    async fn start_verification(
        &self,
        phone_number: &str,
    ) -> Result<VerificationStart, ProviderError> {
        self.0
            .start_verification(phone_number)
            .await
            .map_err(provider_error)
    }

    async fn check_code(&self, request_id: &str, code: &str) -> Result<(), ProviderError> {
        self.0
            .check_code(request_id, code)
            .await
            .map_err(provider_error)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub verify: Arc<dyn BaseVerifyService>,
    pub model: Arc<dyn BaseGenerativeModel>,
    pub sessions: Arc<dyn BaseSessionService>,
    /// Retrieval provider supplying {title, content} source records.
    /// Declared collaborator; no route invokes it directly.
    pub web_searcher: Arc<dyn BaseSearchService>,
    pub suggestion_cache: Arc<SuggestionCache>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        verify: Arc<dyn BaseVerifyService>,
        model: Arc<dyn BaseGenerativeModel>,
        sessions: Arc<dyn BaseSessionService>,
        web_searcher: Arc<dyn BaseSearchService>,
        suggestion_cache: Arc<SuggestionCache>,
    ) -> Self {
        Self {
            verify,
            model,
            sessions,
            web_searcher,
            suggestion_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_provider_title() {
        let mapped = provider_error(VonageError::Api {
            status: 400,
            title: "Invalid Code".to_string(),
            detail: Some("The code is invalid.".to_string()),
        });
        assert_eq!(mapped.title.as_deref(), Some("Invalid Code"));
        assert_eq!(mapped.message, "The code is invalid.");
    }

    #[test]
    fn network_error_has_no_title() {
        let mapped = provider_error(VonageError::Network("timed out".to_string()));
        assert!(mapped.title.is_none());
        assert!(mapped.message.contains("timed out"));
    }
}
