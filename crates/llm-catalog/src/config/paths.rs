use anyhow::{Context, Result};
use etcetera::{choose_app_strategy, AppStrategy, AppStrategyArgs};
use std::path::PathBuf;

/// Redirects every directory under a single root, mainly for tests.
pub const PATH_ROOT_ENV: &str = "LLM_CATALOG_PATH_ROOT";

pub struct Paths;

impl Paths {
    /// Directory for logs and other runtime state.
    pub fn state_dir() -> Result<PathBuf> {
        if let Ok(root) = std::env::var(PATH_ROOT_ENV) {
            return Ok(PathBuf::from(root).join("state"));
        }

        let strategy = choose_app_strategy(AppStrategyArgs {
            top_level_domain: "dev".to_string(),
            author: "llm-catalog".to_string(),
            app_name: "llm-catalog".to_string(),
        })
        .context("llm-catalog requires a home directory")?;

        Ok(strategy.state_dir().unwrap_or_else(|| strategy.data_dir()))
    }

    pub fn in_state_dir(subpath: &str) -> Result<PathBuf> {
        Ok(Self::state_dir()?.join(subpath))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_path_root_override() {
        let root = TempDir::new().unwrap();
        std::env::set_var(PATH_ROOT_ENV, root.path());

        assert_eq!(Paths::state_dir().unwrap(), root.path().join("state"));
        assert_eq!(
            Paths::in_state_dir("logs").unwrap(),
            root.path().join("state").join("logs")
        );

        std::env::remove_var(PATH_ROOT_ENV);
    }
}
