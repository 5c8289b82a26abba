//! Event Data Model
//!
//! Shapes shared by the prompt builder, the Gemini client and the HTTP API:
//! the event metadata a user submits and the generated page that comes back.

use serde::{Deserialize, Serialize};

/// Template used when the submitted identifier is empty or unknown.
pub const DEFAULT_TEMPLATE: TemplateId = TemplateId::Modern;

// ============================================================================
// Event Data
// ============================================================================

/// Metadata for one medical event, as entered in the form.
///
/// Every field is free text supplied by the user. Required fields are only
/// enforced by the browser form, never here.
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
    /// Course schedule, placed at the end of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Transport, CME credits and other notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    /// Template identifier (`modern`, `tech`, `elegant`, `creative`).
    #[serde(default = "default_template")]
    pub template: String,
    pub reg_url: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.as_str().to_string()
}

impl EventData {
    /// Resolved template, falling back to [`DEFAULT_TEMPLATE`].
    pub fn template_id(&self) -> TemplateId {
        TemplateId::parse(&self.template).unwrap_or(DEFAULT_TEMPLATE)
    }

    /// Optional schedule, treating blank input as absent.
    pub fn schedule_text(&self) -> Option<&str> {
        non_blank(self.schedule.as_deref())
    }

    /// Optional extra information, treating blank input as absent.
    pub fn extra_info_text(&self) -> Option<&str> {
        non_blank(self.extra_info.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Generation Result
// ============================================================================

/// Page returned by the generation service. The markup is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub preview_html: String,
}

// ============================================================================
// Templates
// ============================================================================

/// Visual style presets offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Tech,
    Elegant,
    Creative,
}

impl TemplateId {
    pub fn all() -> [TemplateId; 4] {
        [Self::Modern, Self::Tech, Self::Elegant, Self::Creative]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Tech => "tech",
            Self::Elegant => "elegant",
            Self::Creative => "creative",
        }
    }

    /// Exact, case-sensitive match on the wire identifier.
    pub fn parse(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == id)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
