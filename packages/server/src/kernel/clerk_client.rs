use async_trait::async_trait;
use serde::Deserialize;

use super::{AuthUser, BaseSessionService};

/// Clerk backend API client for session checks
///
/// The frontend sends its session token in the Authorization header; this
/// client asks Clerk whether that session is still active.
pub struct ClerkClient {
    secret_key: String,
    client: reqwest::Client,
    base_url: String,
}

/// Session object returned by the Clerk backend API
#[derive(Debug, Deserialize)]
struct ClerkSession {
    user_id: String,
    status: String,
}

impl ClerkClient {
    /// Create a new Clerk client
    pub fn new(secret_key: String) -> Self {
        Self {
            secret_key,
            client: reqwest::Client::new(),
            base_url: "https://api.clerk.com".to_string(),
        }
    }

    /// Set a custom base URL (for mock servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl BaseSessionService for ClerkClient {
    async fn current_user(&self, token: &str) -> Option<AuthUser> {
        let response = self
            .client
            .get(format!("{}/v1/sessions/{}", self.base_url, token))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let session: ClerkSession = response.json().await.ok()?;
        if session.status != "active" {
            return None;
        }

        Some(AuthUser {
            user_id: session.user_id,
        })
    }
}
