use llm_catalog::{Catalog, CatalogError, CatalogSource, ModelRecord, ProviderId};
use llm_catalog_test_support::{
    fixture_catalog, fixture_database, fixture_metadata, fixture_models, provider_record,
    write_fixture_file, ModelBuilder, FIXTURE_VERSION,
};
use serial_test::serial;
use tempfile::TempDir;

fn build_with_extra(extra: ModelRecord) -> Result<Catalog, CatalogError> {
    let mut database = fixture_database();
    database.models.push(extra);
    Catalog::from_database(database)
}

#[test]
fn test_fixture_catalog_builds() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), fixture_models().len());
    assert_eq!(catalog.metadata().version, FIXTURE_VERSION);
}

#[test]
fn test_alias_colliding_with_another_model_is_rejected() {
    let err = build_with_extra(
        ModelBuilder::new("delta", ProviderId::OpenAI)
            .alias("alpha")
            .build(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "alias_collision");
    assert!(err.to_string().contains("alpha-large"));
}

#[test]
fn test_alias_shadowing_another_id_is_rejected() {
    let err = build_with_extra(
        ModelBuilder::new("delta", ProviderId::OpenAI)
            .alias("beta-pro")
            .build(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "alias_collision");
}

#[test]
fn test_alias_repeating_own_id_is_allowed() {
    let catalog = build_with_extra(
        ModelBuilder::new("delta", ProviderId::OpenAI)
            .alias("delta")
            .alias("delta-latest")
            .alias("delta-latest")
            .build(),
    )
    .unwrap();
    assert_eq!(catalog.resolve("delta-latest").unwrap().id, "delta");
}

#[test]
fn test_duplicate_model_id_is_rejected() {
    let model = ModelBuilder::new("beta-pro", ProviderId::Anthropic).build();
    let err = build_with_extra(model).unwrap_err();
    assert_eq!(err.kind(), "duplicate_model_id");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let model = ModelBuilder::new("grok", ProviderId::XAI).build();
    let err = build_with_extra(model).unwrap_err();
    assert_eq!(err.kind(), "unknown_provider");
}

#[test]
fn test_duplicate_provider_is_rejected() {
    let mut database = fixture_database();
    database.providers.push(provider_record(ProviderId::OpenAI));
    let err = Catalog::from_database(database).unwrap_err();
    assert_eq!(err.kind(), "duplicate_provider");
}

#[test]
fn test_invalid_prices_are_rejected() {
    let negative = ModelBuilder::new("delta", ProviderId::OpenAI)
        .pricing(-1.0, 2.0)
        .build();
    assert_eq!(build_with_extra(negative).unwrap_err().kind(), "invalid_price");

    let nan_cached = ModelBuilder::new("delta", ProviderId::OpenAI)
        .pricing(1.0, 2.0)
        .cached_input(f64::NAN)
        .build();
    assert_eq!(build_with_extra(nan_cached).unwrap_err().kind(), "invalid_price");
}

#[test]
fn test_zero_limits_are_rejected() {
    let model = ModelBuilder::new("delta", ProviderId::OpenAI)
        .context_window(0)
        .build();
    assert_eq!(build_with_extra(model).unwrap_err().kind(), "invalid_limit");

    let model = ModelBuilder::new("delta", ProviderId::OpenAI)
        .max_output_tokens(0)
        .build();
    assert_eq!(build_with_extra(model).unwrap_err().kind(), "invalid_limit");
}

#[test]
fn test_unresolved_replacement_is_tolerated() {
    let catalog = build_with_extra(
        ModelBuilder::new("delta", ProviderId::OpenAI)
            .replacement("does-not-exist")
            .build(),
    )
    .unwrap();
    assert!(catalog.replacement_model("delta").is_none());
}

#[test]
fn test_empty_catalog_is_valid() {
    let catalog = Catalog::new(fixture_metadata(), Vec::new(), Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.resolve("anything").is_none());
    assert!(catalog.largest_context(5).is_empty());
    assert!(catalog.most_expensive_model().is_none());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture_file(dir.path());

    let catalog = Catalog::from_file(&path).unwrap();
    assert_eq!(catalog.len(), fixture_models().len());

    let loaded = CatalogSource::File(path).load().unwrap();
    assert_eq!(loaded.models(), catalog.models());
}

#[test]
#[serial]
fn test_env_var_selects_data_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture_file(dir.path());

    std::env::set_var(llm_catalog::config::CATALOG_DATA_ENV, &path);
    let catalog = CatalogSource::resolve(None).load().unwrap();
    std::env::remove_var(llm_catalog::config::CATALOG_DATA_ENV);

    assert_eq!(catalog.metadata().version, FIXTURE_VERSION);
}

#[test]
#[serial]
fn test_bundled_is_the_fallback() {
    std::env::remove_var(llm_catalog::config::CATALOG_DATA_ENV);
    let catalog = CatalogSource::resolve(None).load().unwrap();
    assert_eq!(catalog.metadata(), Catalog::bundled().unwrap().metadata());
}
