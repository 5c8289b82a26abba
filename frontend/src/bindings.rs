//! Backend bindings
//!
//! Wire types mirrored from the backend and the HTTP client for
//! `POST /api/generate`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::services::shell_state::GenerationService;

/// Default endpoint, relative to the page origin.
pub const GENERATE_ENDPOINT: &str = "/api/generate";

// ============================================================================
// Types - Mirror backend types for frontend use
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub topic: String,
    pub date: String,
    pub location: String,
    pub content: String,
    pub speaker: String,
    pub fee: String,
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    pub template: String,
    pub reg_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub preview_html: String,
}

// ============================================================================
// HTTP Client
// ============================================================================

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Browser window unavailable")]
    NoWindow,

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// POST the event to the backend and decode the generated page.
pub async fn generate_event_content(
    endpoint: &str,
    data: &EventData,
) -> Result<GenerationResult, ServiceError> {
    let body = serde_json::to_string(data)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(endpoint, &init)
        .map_err(|e| ServiceError::Network(js_error(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ServiceError::Network(js_error(e)))?;

    let window = web_sys::window().ok_or(ServiceError::NoWindow)?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ServiceError::Network(js_error(e)))?
        .dyn_into()
        .map_err(|e| ServiceError::Decode(js_error(e)))?;

    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }

    let json = response.json().map_err(|e| ServiceError::Decode(js_error(e)))?;
    let value = JsFuture::from(json)
        .await
        .map_err(|e| ServiceError::Decode(js_error(e)))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Generation service backed by the MedEventGen HTTP API.
#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    endpoint: String,
}

impl HttpGenerationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpGenerationService {
    fn default() -> Self {
        Self::new(GENERATE_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, data: &EventData) -> Result<GenerationResult, ServiceError> {
        generate_event_content(&self.endpoint, data).await
    }
}
