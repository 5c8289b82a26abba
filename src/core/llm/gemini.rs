//! Gemini Generation Client (API Key-based)
//!
//! Calls the Generative Language API `generateContent` endpoint with a
//! structured-output schema so the model answers with a JSON object holding
//! the generated page.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;

use crate::config::GeminiConfig;
use crate::core::event::{EventData, GenerationResult};
use crate::core::llm::{EventGenerator, GenerationError, Result};
use crate::core::prompt::{GenerationRequest, PREVIEW_HTML_FIELD};

/// Gemini client bound to one API key and model.
///
/// The key is injected at construction; the client never reads the
/// environment itself.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_body(request: &GenerationRequest) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema
            }
        })
    }

    /// Send one `generateContent` call and return the model's text output.
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<String> {
        if !self.has_api_key() {
            return Err(GenerationError::NotConfigured(
                "Gemini API key is empty".to_string(),
            ));
        }

        let start = Instant::now();
        let resp = self
            .client
            .post(self.endpoint())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await?;

        let status = resp.status();
        let latency = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: serde_json::Value = resp.json().await?;
        tracing::debug!(model = %self.model, latency_ms = latency, "Gemini responded");

        extract_text(&json)
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(json: &serde_json::Value) -> Result<String> {
    let parts = json["candidates"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["content"]["parts"].as_array())
        .ok_or_else(|| GenerationError::InvalidResponse("Missing content".to_string()))?;

    let text: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
    if text.is_empty() {
        return Err(GenerationError::InvalidResponse(
            "Missing text in response parts".to_string(),
        ));
    }
    Ok(text)
}

/// Parse the model's JSON output into a result, enforcing the schema shape.
pub fn parse_generation_payload(text: &str) -> Result<GenerationResult> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let html = value[PREVIEW_HTML_FIELD].as_str().ok_or_else(|| {
        GenerationError::InvalidResponse(format!("Missing string field '{PREVIEW_HTML_FIELD}'"))
    })?;

    Ok(GenerationResult {
        preview_html: html.to_string(),
    })
}

#[async_trait]
impl EventGenerator for GeminiClient {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, data: &EventData) -> Result<GenerationResult> {
        let request = GenerationRequest::for_event(data);
        let text = self.generate_content(&request).await?;
        parse_generation_payload(&text)
    }
}
