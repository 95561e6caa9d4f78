use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::index::LookupIndex;
use super::model::ModelRecord;
use super::provider::{ProviderId, ProviderRecord};
use crate::errors::CatalogError;

/// Catalog shipped with the crate, parsed and validated on first use.
static BUNDLED_CATALOG: Lazy<Result<Catalog, CatalogError>> = Lazy::new(|| {
    const CATALOG_JSON: &str = include_str!("data/catalog.json");
    Catalog::from_json_str(CATALOG_JSON)
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub version: String,
    pub last_updated: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

/// The serialized `{metadata, providers, models}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDatabase {
    pub metadata: CatalogMetadata,
    pub providers: Vec<ProviderRecord>,
    pub models: Vec<ModelRecord>,
}

/// An immutable, validated table of providers and models.
///
/// Records keep their table order; every ordered query result follows it.
/// There is no mutation API: a new catalog version is a new `Catalog`.
#[derive(Debug, Clone)]
pub struct Catalog {
    metadata: CatalogMetadata,
    providers: Vec<ProviderRecord>,
    models: Vec<ModelRecord>,
    index: LookupIndex,
}

impl Catalog {
    pub fn new(
        metadata: CatalogMetadata,
        providers: Vec<ProviderRecord>,
        models: Vec<ModelRecord>,
    ) -> Result<Self, CatalogError> {
        validate_records(&providers, &models)?;
        let index = LookupIndex::build(&models)?;

        for model in &models {
            if let Some(replacement) = &model.replacement_model {
                if index.position(replacement).is_none() {
                    tracing::warn!(
                        model = %model.id,
                        replacement = %replacement,
                        "replacement model does not resolve"
                    );
                }
            }
        }

        tracing::debug!(
            version = %metadata.version,
            providers = providers.len(),
            models = models.len(),
            identifiers = index.len(),
            "catalog built"
        );

        Ok(Self {
            metadata,
            providers,
            models,
            index,
        })
    }

    pub fn from_database(database: CatalogDatabase) -> Result<Self, CatalogError> {
        Self::new(database.metadata, database.providers, database.models)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let database: CatalogDatabase = serde_json::from_str(json)?;
        Self::from_database(database)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn bundled() -> anyhow::Result<&'static Self> {
        BUNDLED_CATALOG.as_ref().map_err(bundled_load_error)
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    pub fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    pub fn provider(&self, id: ProviderId) -> Option<&ProviderRecord> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    /// Resolves a model id or alias. Matching is exact and case-sensitive.
    pub fn resolve(&self, identifier: &str) -> Option<&ModelRecord> {
        self.index
            .position(identifier)
            .and_then(|position| self.models.get(position))
    }

    /// Resolves each identifier in turn, keeping the input's length and order.
    pub fn models_by_ids<I, S>(&self, identifiers: I) -> Vec<Option<&ModelRecord>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        identifiers
            .into_iter()
            .map(|id| self.resolve(id.as_ref()))
            .collect()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.position(identifier).is_some()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Snapshot of the full catalog in its serialized shape.
    pub fn database(&self) -> CatalogDatabase {
        CatalogDatabase {
            metadata: self.metadata.clone(),
            providers: self.providers.clone(),
            models: self.models.clone(),
        }
    }
}

/// Wraps the cached construction error so callers still see it as the source.
fn bundled_load_error(err: &'static CatalogError) -> anyhow::Error {
    anyhow::Error::new(err).context("Failed to load bundled catalog")
}

fn validate_records(
    providers: &[ProviderRecord],
    models: &[ModelRecord],
) -> Result<(), CatalogError> {
    let mut known = HashSet::with_capacity(providers.len());
    for provider in providers {
        if !known.insert(provider.id) {
            return Err(CatalogError::DuplicateProvider(provider.id));
        }
    }

    for model in models {
        if !known.contains(&model.provider) {
            return Err(CatalogError::UnknownProvider {
                model: model.id.clone(),
                provider: model.provider,
            });
        }

        if model.limits.context_window == 0 {
            return Err(CatalogError::InvalidLimit {
                model: model.id.clone(),
                field: "contextWindow",
            });
        }
        if model.limits.max_output_tokens == 0 {
            return Err(CatalogError::InvalidLimit {
                model: model.id.clone(),
                field: "maxOutputTokens",
            });
        }

        if let Some(pricing) = &model.pricing {
            let prices = [
                ("input", Some(pricing.input)),
                ("output", Some(pricing.output)),
                ("cachedInput", pricing.cached_input),
                ("perImage", pricing.per_image),
                ("perAudioMinute", pricing.per_audio_minute),
            ];
            for (field, price) in prices {
                if let Some(price) = price {
                    if !price.is_finite() || price < 0.0 {
                        return Err(CatalogError::InvalidPrice {
                            model: model.id.clone(),
                            field,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.providers().len(), ProviderId::ALL.len());
        for id in ProviderId::ALL {
            assert!(catalog.provider(id).is_some(), "missing provider {id}");
        }
    }

    #[test]
    fn test_bundled_catalog_resolves_every_identifier_to_its_record() {
        let catalog = Catalog::bundled().unwrap();
        for model in catalog.models() {
            assert_eq!(catalog.resolve(&model.id), Some(model));
            for alias in &model.aliases {
                assert_eq!(catalog.resolve(alias), Some(model));
            }
        }
        assert!(catalog.resolve("__nonexistent__").is_none());
    }

    #[test]
    fn test_bundled_replacements_resolve() {
        let catalog = Catalog::bundled().unwrap();
        for model in catalog.models() {
            if let Some(replacement) = &model.replacement_model {
                assert!(
                    catalog.contains(replacement),
                    "{} points at missing replacement {}",
                    model.id,
                    replacement
                );
            }
        }
    }

    #[test]
    fn test_models_by_ids_is_positional() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.models()[0];
        let found = catalog.models_by_ids([first.id.as_str(), "missing", first.id.as_str()]);

        assert_eq!(found.len(), 3);
        assert_eq!(found[0], Some(first));
        assert_eq!(found[1], None);
        assert_eq!(found[2], Some(first));
        assert!(catalog.models_by_ids(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_database_round_trips_through_json() {
        let catalog = Catalog::bundled().unwrap();
        let json = serde_json::to_string(&catalog.database()).unwrap();
        let reloaded = Catalog::from_json_str(&json).unwrap();

        assert_eq!(reloaded.metadata(), catalog.metadata());
        assert_eq!(reloaded.models(), catalog.models());
        assert_eq!(reloaded.providers(), catalog.providers());
    }

    #[test]
    fn test_from_file_reports_missing_path() {
        let err = Catalog::from_file("/definitely/not/here/catalog.json").unwrap_err();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_bundled_load_error_keeps_the_catalog_error() {
        let cause: &'static CatalogError =
            Box::leak(Box::new(CatalogError::DuplicateModelId("gpt-5".to_string())));
        let err = bundled_load_error(cause);

        assert_eq!(err.to_string(), "Failed to load bundled catalog");
        assert_eq!(err.chain().count(), 2);
        assert_eq!(
            err.root_cause().to_string(),
            "Model id 'gpt-5' is defined more than once"
        );
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{\"metadata\": 3}").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }
}
