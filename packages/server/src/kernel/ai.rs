// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseGenerativeModel.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateContentRequest, GenerateContentResponse};

use super::BaseGenerativeModel;

/// Default generation model.
pub const GEMINI_FLASH: &str = "gemini-2.5-flash";

/// Gemini implementation of text generation
#[derive(Clone)]
pub struct GeminiModel {
    client: GeminiClient,
    model: String,
}

impl GeminiModel {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: GEMINI_FLASH.to_string(),
        }
    }

    /// Override the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl BaseGenerativeModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = %self.model,
            "Calling Gemini API"
        );

        let response = self
            .client
            .generate_content(&self.model, &GenerateContentRequest::from_prompt(prompt))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Gemini API call failed");
                e
            })
            .context("Failed to call Gemini API")?;

        tracing::debug!(
            candidates = response.candidates.len(),
            model = %self.model,
            "Gemini API response received"
        );

        Ok(response)
    }
}
