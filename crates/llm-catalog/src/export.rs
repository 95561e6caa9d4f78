//! Writes the catalog as a set of static JSON documents:
//!
//! - `database.json`: metadata, providers and models together
//! - `providers.json` and `models.json`
//! - `models-<provider>.json`: one per provider
//! - `metadata.json`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::catalog::{Catalog, ModelRecord};

pub const DATABASE_FILE: &str = "database.json";
pub const PROVIDERS_FILE: &str = "providers.json";
pub const MODELS_FILE: &str = "models.json";
pub const METADATA_FILE: &str = "metadata.json";

pub fn provider_models_file(provider: &str) -> String {
    format!("models-{}.json", provider)
}

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Replace `generatedAt` with the current time instead of keeping the
    /// loaded value. Off by default so repeated exports are byte-identical.
    pub restamp: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub providers: usize,
    pub models: usize,
}

fn write_json<T: Serialize + ?Sized>(path: PathBuf, value: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

pub fn export_json(
    catalog: &Catalog,
    dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut database = catalog.database();
    if options.restamp {
        database.metadata.generated_at = Utc::now();
    }

    let mut files = vec![
        write_json(dir.join(DATABASE_FILE), &database)?,
        write_json(dir.join(PROVIDERS_FILE), &database.providers)?,
        write_json(dir.join(MODELS_FILE), &database.models)?,
    ];

    for provider in &database.providers {
        let models: Vec<&ModelRecord> = database
            .models
            .iter()
            .filter(|m| m.provider == provider.id)
            .collect();
        files.push(write_json(
            dir.join(provider_models_file(provider.id.as_str())),
            &models,
        )?);
    }

    files.push(write_json(dir.join(METADATA_FILE), &database.metadata)?);

    let summary = ExportSummary {
        files,
        providers: database.providers.len(),
        models: database.models.len(),
    };

    tracing::info!(
        dir = %dir.display(),
        files = summary.files.len(),
        models = summary.models,
        "catalog exported"
    );

    Ok(summary)
}
