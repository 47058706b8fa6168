//! Client for the Generative Language API

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::InsightProvider;
use super::prompt::{build_prompt, response_schema};
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};
use crate::app::models::{DiveConditions, DiveEntry, GeminiInsight};
use crate::config::InsightConfig;
use crate::constants::USER_AGENT;
use crate::{Error, Result};

/// Insight provider backed by a Gemini model
#[derive(Clone)]
pub struct GeminiInsightClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiInsightClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInsightClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiInsightClient {
    /// Create a client; fails when no API key is configured
    pub fn new(config: &InsightConfig, timeout: Duration) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            Error::configuration("API key is required to initialize the insight client")
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// generateContent endpoint for the configured model
    fn endpoint(&self) -> Result<Url> {
        let raw = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let mut url = Url::parse(&raw).map_err(|e| Error::invalid_url(&raw, e.to_string()))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Request body asking for a schema-conforming JSON insight
    pub fn create_request(&self, conditions: &DiveConditions<'_>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(build_prompt(conditions))],
                role: Some("user".to_string()),
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema()),
            }),
        }
    }

    /// Request an insight, surfacing every failure as an error
    pub async fn request_insight(&self, conditions: &DiveConditions<'_>) -> Result<GeminiInsight> {
        let request = self.create_request(conditions);

        let response = self
            .client
            .post(self.endpoint()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::http("Failed to send insight request", e))?;

        let status = response.status();
        if !status.is_success() {
            let endpoint = format!("{}/models/{}:generateContent", self.base_url, self.model);
            return Err(Error::http_status(endpoint, status.as_u16()));
        }

        let body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| Error::http("Failed to parse insight response", e))?;

        let text = body
            .first_text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| Error::insight_response("no text in response"))?;

        parse_insight_text(text)
    }
}

/// Decode the model's JSON text, requiring all three fields
pub fn parse_insight_text(text: &str) -> Result<GeminiInsight> {
    let insight: GeminiInsight =
        serde_json::from_str(text.trim()).map_err(|e| Error::json("Malformed insight JSON", e))?;

    if !insight.is_complete() {
        return Err(Error::insight_response("insight has empty fields"));
    }
    Ok(insight)
}

impl InsightProvider for GeminiInsightClient {
    async fn get_insight(&self, entry: &DiveEntry) -> Option<GeminiInsight> {
        match self.request_insight(&entry.conditions()).await {
            Ok(insight) => {
                debug!("Insight ready for {}: {}", entry.dive_site, insight.title);
                Some(insight)
            }
            Err(e) => {
                warn!("Gemini Error for {}: {:#}", entry.dive_site, e);
                None
            }
        }
    }
}
