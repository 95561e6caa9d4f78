use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Once;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use llm_catalog::config::Paths;

// Used to ensure we only set up tracing once
static INIT: Once = Once::new();

pub fn prepare_log_directory() -> Result<PathBuf> {
    let log_dir = Paths::in_state_dir("logs")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    Ok(log_dir)
}

/// Sets up JSON file logging under the state directory. Nothing is written
/// to the console; stdout belongs to command output.
pub fn setup_logging(name: Option<&str>) -> Result<()> {
    setup_logging_internal(name, false)
}

/// `force` installs the subscriber for the current thread only and skips the
/// `Once` guard, for tests.
fn setup_logging_internal(name: Option<&str>, force: bool) -> Result<()> {
    let mut result = Ok(());

    let mut setup = || {
        result = (|| {
            let log_dir = prepare_log_directory()?;
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
            let log_filename = match name {
                Some(n) => format!("{}-{}.log", timestamp, n),
                None => format!("{}.log", timestamp),
            };
            let file_appender = tracing_appender::rolling::RollingFileAppender::new(
                Rotation::NEVER,
                log_dir,
                log_filename,
            );

            let file_layer = fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(file_appender)
                .with_ansi(false)
                .json();

            let env_filter = match EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => EnvFilter::new("")
                    .add_directive("llm_catalog=debug".parse()?)
                    .add_directive("llm_catalog_cli=info".parse()?)
                    .add_directive(LevelFilter::WARN.into()),
            };

            let subscriber = Registry::default().with(file_layer.with_filter(env_filter));

            if force {
                let _guard = subscriber.set_default();
                tracing::info!("logging initialised");
                Ok(())
            } else {
                subscriber
                    .try_init()
                    .context("Failed to set global subscriber")?;
                Ok(())
            }
        })();
    };

    if force {
        setup();
    } else {
        INIT.call_once(setup);
    }

    result
}
