pub mod paths;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::Catalog;

pub use paths::Paths;

/// Points the catalog at a JSON file in the `database.json` shape instead of
/// the bundled data.
pub const CATALOG_DATA_ENV: &str = "LLM_CATALOG_DATA";

/// Where a catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    /// An explicit path wins, then `LLM_CATALOG_DATA`, then the bundled data.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return CatalogSource::File(path);
        }
        match std::env::var_os(CATALOG_DATA_ENV) {
            Some(path) if !path.is_empty() => CatalogSource::File(PathBuf::from(path)),
            _ => CatalogSource::Bundled,
        }
    }

    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Bundled => Ok(Catalog::bundled()?.clone()),
            CatalogSource::File(path) => Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_resolution_order() {
        std::env::remove_var(CATALOG_DATA_ENV);
        assert_eq!(CatalogSource::resolve(None), CatalogSource::Bundled);

        std::env::set_var(CATALOG_DATA_ENV, "/tmp/from-env.json");
        assert_eq!(
            CatalogSource::resolve(None),
            CatalogSource::File(PathBuf::from("/tmp/from-env.json"))
        );
        assert_eq!(
            CatalogSource::resolve(Some(PathBuf::from("/tmp/flag.json"))),
            CatalogSource::File(PathBuf::from("/tmp/flag.json"))
        );

        std::env::set_var(CATALOG_DATA_ENV, "");
        assert_eq!(CatalogSource::resolve(None), CatalogSource::Bundled);
        std::env::remove_var(CATALOG_DATA_ENV);
    }

    #[test]
    fn test_missing_file_source_fails_with_context() {
        let err = CatalogSource::File(PathBuf::from("/nope/catalog.json"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("/nope/catalog.json"));
    }
}
