use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::parse_wire;

/// Closed set of organisations operating catalogued models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAI,
    Anthropic,
    Google,
    XAI,
    Mistral,
    Meta,
    DeepSeek,
    ZAI,
}

impl ProviderId {
    pub const ALL: [ProviderId; 8] = [
        ProviderId::OpenAI,
        ProviderId::Anthropic,
        ProviderId::Google,
        ProviderId::XAI,
        ProviderId::Mistral,
        ProviderId::Meta,
        ProviderId::DeepSeek,
        ProviderId::ZAI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAI => "openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Google => "google",
            ProviderId::XAI => "xai",
            ProviderId::Mistral => "mistral",
            ProviderId::Meta => "meta",
            ProviderId::DeepSeek => "deepseek",
            ProviderId::ZAI => "zai",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("provider", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    pub id: ProviderId,
    pub name: String,
    pub website: String,
    pub api_base_url: String,
    pub api_docs_url: String,

    /// Endpoint listing the provider's models, when it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_endpoint: Option<String>,

    /// Emoji or URL
    pub icon: String,

    /// Brand colour as a hex string
    pub color: String,

    pub description: String,

    #[serde(default)]
    pub features: Vec<String>,
}
