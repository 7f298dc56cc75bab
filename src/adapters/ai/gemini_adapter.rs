//! Gemini `generateContent` adapter.
//!
//! Implements `LanguageServicePort`: maps an `OutboundRequest` to the wire body
//! (search-grounding tool or JSON response schema, depending on mode) and
//! extracts reply text plus grounding citations from the first candidate.

use crate::domain::{Citation, DomainError, OutboundRequest, RawReply};
use crate::ports::LanguageServicePort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Gemini REST adapter.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_url` - API base (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - API key, sent as `x-goog-api-key`
    /// * `model` - Model name (e.g., "gemini-2.5-flash")
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    /// Returns `DomainError::Service` if the HTTP client cannot be initialised.
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Service(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    fn request_body(request: &OutboundRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(request.prompt.clone()),
                }],
            }],
            tools: request.use_search_grounding.then(|| {
                vec![Tool {
                    google_search: serde_json::json!({}),
                }]
            }),
            generation_config: request
                .response_schema
                .as_ref()
                .map(|schema| GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema.clone(),
                }),
        }
    }

    /// Pull reply text and citations out of the first candidate.
    fn into_reply(response: GenerateResponse) -> Result<RawReply, DomainError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Service("No candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
            return Err(DomainError::Service(format!(
                "Empty candidate (finish reason: {})",
                reason
            )));
        }

        let citations = candidate
            .grounding_metadata
            .map(|g| g.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .map(|web| Citation {
                uri: web.uri,
                title: web.title,
            })
            .collect();

        Ok(RawReply { text, citations })
    }
}

/// generateContent request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

/// generateContent response body (only the parts we read).
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

#[async_trait::async_trait]
impl LanguageServicePort for GeminiAdapter {
    async fn generate(&self, request: &OutboundRequest) -> Result<RawReply, DomainError> {
        info!(
            word = %request.word,
            mode = %request.mode,
            model = %self.model,
            "sending lookup to language service"
        );

        let body = Self::request_body(request);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Service(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "language service returned error");
            return Err(DomainError::Service(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Service(format!("Failed to parse API response: {}", e)))?;

        let reply = Self::into_reply(parsed)?;
        debug!(
            text_len = reply.text.len(),
            citations = reply.citations.len(),
            "received language service reply"
        );
        Ok(reply)
    }
}
