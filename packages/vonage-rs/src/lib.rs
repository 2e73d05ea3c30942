//! Vonage Verify v2 REST API client.
//!
//! Covers the two-step verification workflow: request a code for a phone
//! number, then check the code the user typed against the request id.
//!
//! # Example
//!
//! ```rust,ignore
//! use vonage::{VonageOptions, VonageService};
//!
//! let vonage = VonageService::new(VonageOptions {
//!     api_key: "key".into(),
//!     api_secret: "secret".into(),
//!     application_id: None,
//!     private_key_path: None,
//! })?;
//!
//! let start = vonage.start_verification("14155552671").await?;
//! vonage.check_code(&start.request_id, "1234").await?;
//! ```

pub mod error;
pub mod models;

pub use error::VonageError;
pub use models::{Channel, VerificationStart, WorkflowStep};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::models::{CheckCodeRequest, ProblemDetails, StartVerificationRequest};

const DEFAULT_BASE_URL: &str = "https://api.nexmo.com";

/// Verify v2 requests carry a fixed brand and SMS sender identity.
const BRAND: &str = "WebSeeker";
const SMS_SENDER: &str = "Saan";

/// Application JWTs are short-lived; each request mints a fresh one.
const JWT_TTL_SECONDS: i64 = 900;

#[derive(Debug, Clone)]
pub struct VonageOptions {
    pub api_key: String,
    pub api_secret: String,
    /// Application id for JWT auth. Basic auth is used when absent.
    pub application_id: Option<String>,
    /// Path to the application's RSA private key PEM.
    pub private_key_path: Option<String>,
}

#[derive(Clone)]
pub struct VonageService {
    options: VonageOptions,
    private_key: Option<EncodingKey>,
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ApplicationClaims {
    application_id: String,
    iat: i64,
    exp: i64,
    jti: String,
}

impl VonageService {
    /// Create a new client. Reads the application private key at
    /// construction when application credentials are configured.
    pub fn new(options: VonageOptions) -> Result<Self, VonageError> {
        let client = Client::new();

        let private_key = match (&options.application_id, &options.private_key_path) {
            (Some(_), Some(path)) => {
                let pem = std::fs::read_to_string(path).map_err(|e| {
                    VonageError::Config(format!("Failed to read private key {path}: {e}"))
                })?;
                let key = EncodingKey::from_rsa_pem(pem.as_bytes())
                    .map_err(|e| VonageError::Config(format!("Invalid private key: {e}")))?;
                Some(key)
            }
            _ => None,
        };

        Ok(Self {
            options,
            private_key,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Set a custom base URL (for mock servers in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Start a verification workflow for a phone number over SMS.
    ///
    /// Triggers an outbound send at the provider; calling twice for the
    /// same number sends two codes.
    pub async fn start_verification(
        &self,
        to: &str,
    ) -> Result<VerificationStart, VonageError> {
        let request = StartVerificationRequest {
            brand: BRAND,
            workflow: vec![WorkflowStep {
                channel: Channel::Sms,
                to,
                from: Some(SMS_SENDER),
            }],
        };

        let response = self
            .authorize(self.client.post(format!("{}/v2/verify", self.base_url)))
            .json(&request)
            .send()
            .await
            .map_err(|e| VonageError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        response
            .json::<VerificationStart>()
            .await
            .map_err(|e| VonageError::Parse(format!("Invalid verification response: {e}")))
    }

    /// Check a user-supplied code against an outstanding request id.
    ///
    /// A wrong code surfaces as `VonageError::Api` whose `title` is the
    /// provider's mismatch title; callers match on it.
    pub async fn check_code(&self, request_id: &str, code: &str) -> Result<(), VonageError> {
        let response = self
            .authorize(
                self.client
                    .post(format!("{}/v2/verify/{}", self.base_url, request_id)),
            )
            .json(&CheckCodeRequest { code })
            .send()
            .await
            .map_err(|e| VonageError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.application_jwt() {
            Some(token) => builder.bearer_auth(token),
            None => builder.basic_auth(
                self.options.api_key.clone(),
                Some(self.options.api_secret.clone()),
            ),
        }
    }

    /// Mint an application JWT when application credentials are configured.
    fn application_jwt(&self) -> Option<String> {
        let key = self.private_key.as_ref()?;
        let application_id = self.options.application_id.clone()?;

        let now = chrono::Utc::now().timestamp();
        let claims = ApplicationClaims {
            application_id,
            iat: now,
            exp: now + JWT_TTL_SECONDS,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::RS256), &claims, key).ok()
    }

    async fn api_error(response: reqwest::Response) -> VonageError {
        let status = response.status().as_u16();
        match response.json::<ProblemDetails>().await {
            Ok(problem) => VonageError::Api {
                status,
                title: problem.title,
                detail: problem.detail,
            },
            Err(_) => VonageError::Api {
                status,
                title: format!("Vonage returned HTTP {status}"),
                detail: None,
            },
        }
    }
}
