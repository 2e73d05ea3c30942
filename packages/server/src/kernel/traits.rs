// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to verify, what to prompt for) lives in domain
// functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseVerifyService)

use async_trait::async_trait;
use thiserror::Error;

pub use gemini_client::GenerateContentResponse;
pub use vonage::VerificationStart;

// =============================================================================
// Verification Service Trait (Infrastructure - SMS/OTP)
// =============================================================================

/// Failure reported by the verification provider.
///
/// `title` is the provider's structured error title when one was returned;
/// callers match it to recognize specific conditions such as a wrong code.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub title: Option<String>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait BaseVerifyService: Send + Sync {
    /// Start a verification workflow; returns the provider's opaque
    /// request id. Each call triggers a new code send.
    async fn start_verification(
        &self,
        phone_number: &str,
    ) -> Result<VerificationStart, ProviderError>;

    /// Check a user-supplied code against an outstanding request id.
    async fn check_code(&self, request_id: &str, code: &str) -> Result<(), ProviderError>;
}

// =============================================================================
// Generative Model Trait (Infrastructure - LLM)
// =============================================================================

#[async_trait]
pub trait BaseGenerativeModel: Send + Sync {
    /// Generate text from a single instruction prompt.
    ///
    /// Returns the provider's candidate structure so callers can tell an
    /// empty completion apart from a response with no candidates at all.
    async fn generate(&self, prompt: &str) -> anyhow::Result<GenerateContentResponse>;
}

// =============================================================================
// Session Service Trait (Infrastructure - Auth provider)
// =============================================================================

/// Authenticated user information from the session provider
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

#[async_trait]
pub trait BaseSessionService: Send + Sync {
    /// Resolve the current user for a session token, or None when the
    /// token is missing, invalid, or expired.
    async fn current_user(&self, token: &str) -> Option<AuthUser>;
}

// =============================================================================
// Search Service Trait (Infrastructure - retrieval provider)
// =============================================================================

/// A retrieved source record.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
}

#[async_trait]
pub trait BaseSearchService: Send + Sync {
    async fn search(
        &self,
        query: &str,
        max_results: Option<usize>,
    ) -> anyhow::Result<Vec<SearchResult>>;
}
