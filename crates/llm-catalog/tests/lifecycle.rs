use chrono::{Days, NaiveDate};
use llm_catalog::DeprecationInfo;
use llm_catalog_test_support::{fixture_catalog, fixture_today};

fn ids(models: Vec<&llm_catalog::ModelRecord>) -> Vec<&str> {
    models.into_iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn test_status_partitions() {
    let catalog = fixture_catalog();
    assert_eq!(ids(catalog.deprecated_models()), vec!["beta-legacy"]);
    assert_eq!(ids(catalog.disabled_models()), vec!["gamma-old"]);
    assert_eq!(catalog.active_models().len(), 6);
}

#[test]
fn test_replacement_resolves_through_index() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.replacement_model("beta-legacy").unwrap().id, "beta-pro");
    assert_eq!(catalog.replacement_model("gamma-old").unwrap().id, "gamma-long");
    assert!(catalog.replacement_model("alpha").is_none());
    assert!(catalog.replacement_model("missing").is_none());
}

#[test]
fn test_deprecation_info_for_known_and_unknown_models() {
    let catalog = fixture_catalog();

    let info = catalog.is_model_deprecated("beta-legacy");
    assert!(info.is_deprecated);
    assert!(!info.is_disabled);
    assert_eq!(info.deprecation_date, NaiveDate::from_ymd_opt(2025, 9, 1));
    assert_eq!(info.shutdown_date, NaiveDate::from_ymd_opt(2026, 3, 1));
    assert_eq!(info.replacement_model.as_deref(), Some("beta-pro"));

    let info = catalog.is_model_deprecated("gamma-old");
    assert!(!info.is_deprecated);
    assert!(info.is_disabled);

    assert_eq!(
        catalog.is_model_deprecated("unknown-id"),
        DeprecationInfo::default()
    );
}

#[test]
fn test_shutdown_window_is_inclusive() {
    let catalog = fixture_catalog();
    let today = fixture_today();

    // 2026-01-01 + 59 days lands exactly on 2026-03-01
    assert_eq!(
        ids(catalog.models_shutting_down_between(today, 59)),
        vec!["beta-legacy"]
    );
    assert!(catalog.models_shutting_down_between(today, 58).is_empty());

    let shutdown_day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(
        ids(catalog.models_shutting_down_between(shutdown_day, 0)),
        vec!["beta-legacy"]
    );
    let day_after = shutdown_day.checked_add_days(Days::new(1)).unwrap();
    assert!(catalog.models_shutting_down_between(day_after, 365).is_empty());
}

#[test]
fn test_past_shutdowns_are_not_upcoming() {
    let catalog = fixture_catalog();
    let before_everything = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert_eq!(
        ids(catalog.models_shutting_down_between(before_everything, 3650)),
        vec!["beta-legacy", "gamma-old"]
    );
    assert!(!ids(catalog.models_shutting_down_between(fixture_today(), 3650))
        .contains(&"gamma-old"));
}

#[test]
fn test_huge_window_does_not_overflow() {
    let catalog = fixture_catalog();
    let upcoming = catalog.models_shutting_down_between(fixture_today(), u32::MAX);
    assert_eq!(ids(upcoming), vec!["beta-legacy"]);
}
