use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ========================================
/// Model request/response records
/// ========================================

/// What the user told us about the business.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalLanguageInput {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

impl NaturalLanguageInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Parse,
    Enhance,
    Copy,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Parse => "parse",
            Mode::Enhance => "enhance",
            Mode::Copy => "copy",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tx {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Tx {
    pub fn new(id: Uuid) -> Self {
        Self { id, timestamp: Utc::now() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub system: String,
    pub user: String,
    /// Sampling temperature requested for this call.
    pub temperature: f32,
    /// Ask providers that support it for a JSON-only response.
    #[serde(default)]
    pub json_only: bool,
}

/// One provider call as recorded in the transcript directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    pub mode: Mode,
    pub transaction: Tx,
    pub provider: String,
    pub model: String,
    pub instruction: Instruction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub mode: Mode,
    pub transaction: Tx,
    /// Raw response text, before JSON extraction.
    pub text: String,
}
