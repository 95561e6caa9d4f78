use std::path::{Path, PathBuf};

use chrono::{NaiveDate, TimeZone, Utc};
use llm_catalog::{
    Catalog, CatalogDatabase, CatalogMetadata, ModelCapability, ModelRecord, ModelStatus,
    ModelTag, ProviderId, ProviderRecord,
};

use crate::builder::ModelBuilder;

pub const FIXTURE_VERSION: &str = "0.0.1-fixture";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Reference "today" for lifecycle tests over the fixture catalog.
pub fn fixture_today() -> NaiveDate {
    date(2026, 1, 1)
}

pub fn fixture_metadata() -> CatalogMetadata {
    CatalogMetadata {
        version: FIXTURE_VERSION.to_string(),
        last_updated: date(2025, 12, 1),
        generated_at: Utc
            .with_ymd_and_hms(2025, 12, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    }
}

pub fn provider_record(id: ProviderId) -> ProviderRecord {
    ProviderRecord {
        id,
        name: format!("{} (fixture)", id),
        website: format!("https://{}.example.com", id),
        api_base_url: format!("https://api.{}.example.com/v1", id),
        api_docs_url: format!("https://docs.{}.example.com", id),
        models_endpoint: None,
        icon: "*".to_string(),
        color: "#000000".to_string(),
        description: format!("Fixture provider {}", id),
        features: vec!["chat".to_string()],
    }
}

/// A small table with known prices, ties and lifecycle dates.
///
/// Order matters: several tests depend on table order for tie-breaking.
pub fn fixture_models() -> Vec<ModelRecord> {
    use ModelCapability::*;

    vec![
        ModelBuilder::new("alpha-large", ProviderId::OpenAI)
            .name("Alpha Large")
            .alias("alpha")
            .capabilities([FunctionCalling, Vision, Reasoning])
            .tags([ModelTag::Flagship, ModelTag::Reasoning])
            .context_window(200_000)
            .pricing(10.0, 30.0)
            .cached_input(5.0)
            .build(),
        ModelBuilder::new("alpha-small", ProviderId::OpenAI)
            .name("Alpha Small")
            .alias("alpha-mini")
            .capabilities([FunctionCalling])
            .tags([ModelTag::Fast, ModelTag::CostEffective])
            .pricing(0.5, 1.5)
            .build(),
        ModelBuilder::new("beta-pro", ProviderId::Anthropic)
            .name("Beta Pro")
            .capabilities([FunctionCalling, Vision])
            .tags([ModelTag::Balanced, ModelTag::Coding])
            .context_window(200_000)
            .pricing(3.0, 15.0)
            .cached_input(0.3)
            .build(),
        ModelBuilder::new("beta-legacy", ProviderId::Anthropic)
            .name("Beta Legacy")
            .tags([ModelTag::Flagship, ModelTag::Deprecated])
            .context_window(200_000)
            .pricing(15.0, 75.0)
            .deprecated(date(2025, 9, 1))
            .shutdown(date(2026, 3, 1))
            .replacement("beta-pro")
            .build(),
        ModelBuilder::new("gamma-exp", ProviderId::Google)
            .name("Gamma Experimental")
            .status(ModelStatus::Experimental)
            .tags([ModelTag::Experimental, ModelTag::Fast])
            .context_window(1_000_000)
            .pricing(0.0, 0.0)
            .build(),
        ModelBuilder::new("gamma-long", ProviderId::Google)
            .name("Gamma Long")
            .capabilities([Vision])
            .tags([ModelTag::Flagship, ModelTag::LongContext, ModelTag::Multimodal])
            .context_window(1_000_000)
            .pricing(1.25, 10.0)
            .build(),
        ModelBuilder::new("gamma-old", ProviderId::Google)
            .name("Gamma Old")
            .status(ModelStatus::Disabled)
            .tags([ModelTag::LongContext])
            .context_window(2_000_000)
            .pricing(1.25, 5.0)
            .shutdown(date(2025, 6, 1))
            .replacement("gamma-long")
            .build(),
        ModelBuilder::new("gamma-embed", ProviderId::Google)
            .name("Gamma Embed")
            .only_capabilities([Embeddings])
            .context_window(2_048)
            .max_output_tokens(768)
            .build(),
    ]
}

pub fn fixture_database() -> CatalogDatabase {
    CatalogDatabase {
        metadata: fixture_metadata(),
        providers: [ProviderId::OpenAI, ProviderId::Anthropic, ProviderId::Google]
            .into_iter()
            .map(provider_record)
            .collect(),
        models: fixture_models(),
    }
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_database(fixture_database()).expect("fixture catalog is valid")
}

/// Writes the fixture database as JSON under `dir` and returns the path.
pub fn write_fixture_file(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    let json = serde_json::to_string_pretty(&fixture_database()).expect("serialize fixture");
    std::fs::write(&path, json).expect("write fixture file");
    path
}
