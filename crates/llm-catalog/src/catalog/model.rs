use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::provider::ProviderId;

/// Parses a wire spelling (e.g. "function-calling") through the serde
/// representation so the accepted strings never drift from the JSON format.
pub(crate) fn parse_wire<T: DeserializeOwned>(kind: &str, s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("invalid {}: {}", kind, s))
}

/// Position of a model in its support lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Stable,
    Beta,
    Experimental,
    Deprecated,
    Disabled,
    Preview,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Stable => "stable",
            ModelStatus::Beta => "beta",
            ModelStatus::Experimental => "experimental",
            ModelStatus::Deprecated => "deprecated",
            ModelStatus::Disabled => "disabled",
            ModelStatus::Preview => "preview",
        }
    }

    /// Everything except `deprecated` and `disabled` counts as active.
    pub fn is_active(&self) -> bool {
        !matches!(self, ModelStatus::Deprecated | ModelStatus::Disabled)
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("status", s)
    }
}

/// A functional trait a model supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelCapability {
    TextGeneration,
    Chat,
    CodeGeneration,
    Vision,
    ImageGeneration,
    FunctionCalling,
    Streaming,
    JsonMode,
    Reasoning,
    Embeddings,
    AudioInput,
    AudioOutput,
    McpServers,
}

impl ModelCapability {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCapability::TextGeneration => "text-generation",
            ModelCapability::Chat => "chat",
            ModelCapability::CodeGeneration => "code-generation",
            ModelCapability::Vision => "vision",
            ModelCapability::ImageGeneration => "image-generation",
            ModelCapability::FunctionCalling => "function-calling",
            ModelCapability::Streaming => "streaming",
            ModelCapability::JsonMode => "json-mode",
            ModelCapability::Reasoning => "reasoning",
            ModelCapability::Embeddings => "embeddings",
            ModelCapability::AudioInput => "audio-input",
            ModelCapability::AudioOutput => "audio-output",
            ModelCapability::McpServers => "mcp-servers",
        }
    }
}

impl fmt::Display for ModelCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelCapability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("capability", s)
    }
}

/// Coarse classification label used for filtering and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelTag {
    Flagship,
    Fast,
    CostEffective,
    Balanced,
    Experimental,
    LongContext,
    Multimodal,
    Reasoning,
    Coding,
    Deprecated,
}

impl ModelTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTag::Flagship => "flagship",
            ModelTag::Fast => "fast",
            ModelTag::CostEffective => "cost-effective",
            ModelTag::Balanced => "balanced",
            ModelTag::Experimental => "experimental",
            ModelTag::LongContext => "long-context",
            ModelTag::Multimodal => "multimodal",
            ModelTag::Reasoning => "reasoning",
            ModelTag::Coding => "coding",
            ModelTag::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for ModelTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("tag", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    /// Cost in USD per million input tokens
    pub input: f64,

    /// Cost in USD per million output tokens
    pub output: f64,

    /// Cost in USD per million input tokens served from a prompt cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_input: Option<f64>,

    /// Cost in USD per image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_image: Option<f64>,

    /// Cost in USD per minute of audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_audio_minute: Option<f64>,
}

impl ModelPricing {
    pub fn new(input: f64, output: f64) -> Self {
        Self {
            input,
            output,
            cached_input: None,
            per_image: None,
            per_audio_minute: None,
        }
    }

    pub fn with_cached_input(mut self, cached_input: f64) -> Self {
        self.cached_input = Some(cached_input);
        self
    }

    /// Combined input + output price per million tokens, the figure every
    /// price ranking and price ceiling compares against.
    pub fn total_per_million(&self) -> f64 {
        self.input + self.output
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelLimits {
    /// Maximum context window in tokens
    pub context_window: u64,

    /// Maximum output tokens per request
    pub max_output_tokens: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm_limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpm_limit: Option<u64>,
}

impl ModelLimits {
    pub fn new(context_window: u64, max_output_tokens: u64) -> Self {
        Self {
            context_window,
            max_output_tokens,
            rpm_limit: None,
            tpm_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Canonical API identifier (e.g. "gpt-5-2025-08-07")
    pub id: String,

    /// Alternate identifiers, typically short names without a date suffix
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Human-readable name (e.g. "GPT-5")
    pub name: String,

    pub provider: ProviderId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,

    pub status: ModelStatus,

    pub capabilities: Vec<ModelCapability>,

    pub tags: Vec<ModelTag>,

    pub limits: ModelLimits,

    /// Absent pricing means the cost is unknown, not that the model is free
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<ModelPricing>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_date: Option<NaiveDate>,

    /// Date the model stops answering requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutdown_date: Option<NaiveDate>,

    /// Id of the model to migrate to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_model: Option<String>,
}

impl ModelRecord {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn has_capability(&self, capability: ModelCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// AND semantics: every listed capability must be present. An empty list
    /// matches every model.
    pub fn has_all_capabilities(&self, required: &[ModelCapability]) -> bool {
        required.iter().all(|c| self.has_capability(*c))
    }

    pub fn has_tag(&self, tag: ModelTag) -> bool {
        self.tags.contains(&tag)
    }

    /// OR semantics: at least one listed tag must be present.
    pub fn has_any_tag(&self, wanted: &[ModelTag]) -> bool {
        wanted.iter().any(|t| self.has_tag(*t))
    }

    /// Input + output price per million tokens, `None` when unpriced.
    pub fn total_price_per_million(&self) -> Option<f64> {
        self.pricing.as_ref().map(ModelPricing::total_per_million)
    }
}
