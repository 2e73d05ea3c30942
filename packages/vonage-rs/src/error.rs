//! Error types for the Vonage client.

use thiserror::Error;

/// Vonage client errors.
#[derive(Debug, Error)]
pub enum VonageError {
    /// Configuration error (missing credentials, unreadable key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response with a problem body)
    #[error("{title}")]
    Api {
        status: u16,
        title: String,
        detail: Option<String>,
    },

    /// Parse error (unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl VonageError {
    /// The provider's error title, when the failure carried one.
    pub fn title(&self) -> Option<&str> {
        match self {
            VonageError::Api { title, .. } => Some(title),
            _ => None,
        }
    }
}
