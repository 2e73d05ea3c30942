use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{BaseSearchService, SearchResult};

/// Exa API client for web search
pub struct ExaClient {
    api_key: String,
    client: reqwest::Client,
}

/// Exa API request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExaRequest {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_results: Option<usize>,
    contents: ExaContents,
}

#[derive(Debug, Serialize)]
struct ExaContents {
    text: bool,
}

/// Exa API response
#[derive(Debug, Deserialize)]
struct ExaResponse {
    results: Vec<ExaResult>,
}

/// Individual search result from Exa
#[derive(Debug, Deserialize)]
struct ExaResult {
    #[serde(default)]
    title: Option<String>,
    url: String,
    #[serde(default)]
    text: String,
}

impl ExaClient {
    /// Create a new Exa client
    pub fn new(api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, client })
    }
}

#[async_trait]
impl BaseSearchService for ExaClient {
    async fn search(
        &self,
        query: &str,
        max_results: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let request = ExaRequest {
            query: query.to_string(),
            num_results: max_results,
            contents: ExaContents { text: true },
        };

        let response = self
            .client
            .post("https://api.exa.ai/search")
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send Exa search request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Exa API error {}: {}", status, body);
        }

        let exa_response: ExaResponse = response
            .json()
            .await
            .context("Failed to parse Exa response")?;

        let results = exa_response
            .results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title.unwrap_or_default(),
                url: r.url,
                content: r.text,
            })
            .collect();

        Ok(results)
    }
}

/// No-op search service for testing or when API key not configured
pub struct NoopSearchService;

#[async_trait]
impl BaseSearchService for NoopSearchService {
    async fn search(
        &self,
        _query: &str,
        _max_results: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        tracing::warn!("NoopSearchService: search called but no Exa API key configured");
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_fields() {
        let request = ExaRequest {
            query: "food shelves".to_string(),
            num_results: Some(5),
            contents: ExaContents { text: true },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["query"], "food shelves");
        assert_eq!(json["numResults"], 5);
        assert_eq!(json["contents"]["text"], true);
    }

    #[tokio::test]
    async fn noop_search_returns_empty() {
        let results = NoopSearchService.search("anything", None).await.unwrap();
        assert!(results.is_empty());
    }
}
