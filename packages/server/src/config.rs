use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub vonage_api_key: String,
    pub vonage_api_secret: String,
    pub vonage_application_id: Option<String>,
    pub vonage_private_key_path: Option<String>,
    pub gemini_api_key: String,
    pub exa_api_key: Option<String>,
    pub clerk_secret_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            vonage_api_key: env::var("VONAGE_API_KEY")
                .context("VONAGE_API_KEY must be set")?,
            vonage_api_secret: env::var("VONAGE_API_SECRET")
                .context("VONAGE_API_SECRET must be set")?,
            vonage_application_id: env::var("VONAGE_APPLICATION_ID").ok(),
            vonage_private_key_path: env::var("VONAGE_PRIVATE_KEY_PATH").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY must be set")?,
            exa_api_key: env::var("EXA_API_KEY").ok(),
            clerk_secret_key: env::var("CLERK_SECRET_KEY")
                .context("CLERK_SECRET_KEY must be set")?,
        })
    }
}
