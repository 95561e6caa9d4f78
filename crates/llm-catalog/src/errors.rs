use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ProviderId;

/// Data-integrity faults detected while building a catalog. A catalog that
/// fails any of these checks is never constructed.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Model '{model}' references unknown provider '{provider}'")]
    UnknownProvider { model: String, provider: ProviderId },

    #[error("Provider '{0}' is defined more than once")]
    DuplicateProvider(ProviderId),

    #[error("Model id '{0}' is defined more than once")]
    DuplicateModelId(String),

    #[error("Identifier '{alias}' of model '{second}' collides with model '{first}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },

    #[error("Model '{model}' has an invalid {field} price (must be finite and non-negative)")]
    InvalidPrice { model: String, field: &'static str },

    #[error("Model '{model}' has a non-positive {field}")]
    InvalidLimit { model: String, field: &'static str },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::UnknownProvider { .. } => "unknown_provider",
            CatalogError::DuplicateProvider(_) => "duplicate_provider",
            CatalogError::DuplicateModelId(_) => "duplicate_model_id",
            CatalogError::AliasCollision { .. } => "alias_collision",
            CatalogError::InvalidPrice { .. } => "invalid_price",
            CatalogError::InvalidLimit { .. } => "invalid_limit",
            CatalogError::Parse(_) => "parse",
            CatalogError::Io { .. } => "io",
        }
    }
}
