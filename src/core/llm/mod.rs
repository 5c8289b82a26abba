//! Generation Client Module
//!
//! Boundary to the hosted text-generation service.
//!
//! - `EventGenerator`: the seam the HTTP API depends on
//! - `GeminiClient`: Gemini `generateContent` implementation with a
//!   structured-output schema
//!
//! Every failure mode is a `GenerationError`; callers treat them all as one
//! generic failure and never see partial results.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::event::{EventData, GenerationResult};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

// ============================================================================
// Generator Trait
// ============================================================================

/// Turns event metadata into a generated page.
///
/// Implementations perform exactly one outbound call per invocation, with no
/// retry and no caching.
#[async_trait]
pub trait EventGenerator: Send + Sync {
    /// Short identifier used in logs.
    fn id(&self) -> &str;

    async fn generate(&self, data: &EventData) -> Result<GenerationResult>;
}
