use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use llm_catalog::lifecycle::DEFAULT_SHUTDOWN_WINDOW_DAYS;
use llm_catalog::query::DEFAULT_LARGEST_CONTEXT_LIMIT;
use llm_catalog::{
    Budget, CatalogSource, ModelCapability, ModelStatus, ModelTag, Priority, ProviderId,
};

use crate::commands::cost::{
    handle_budget, handle_cheapest, handle_compare, handle_cost, handle_recommend,
};
use crate::commands::export::handle_export;
use crate::commands::lifecycle::handle_deprecations;
use crate::commands::models::{handle_largest, handle_list, handle_providers, handle_show};
use crate::logging;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog JSON file to use instead of the bundled data
    /// (also read from LLM_CATALOG_DATA)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

/// Token usage shared by the costing commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct Usage {
    /// Input (prompt) tokens
    #[arg(long, short = 'i', default_value_t = 0)]
    pub input: u64,

    /// Output (completion) tokens
    #[arg(long, short = 'o', default_value_t = 0)]
    pub output: u64,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListFilters {
    #[arg(long)]
    pub provider: Option<ProviderId>,

    #[arg(long)]
    pub status: Option<ModelStatus>,

    /// Required capability; repeat or comma-separate to require several
    #[arg(long = "capability", value_delimiter = ',')]
    pub capabilities: Vec<ModelCapability>,

    /// Accepted tag; any one of them is enough
    #[arg(long = "tag", value_delimiter = ',')]
    pub tags: Vec<ModelTag>,

    /// Minimum context window in tokens
    #[arg(long)]
    pub min_context: Option<u64>,

    /// Maximum input + output price per million tokens
    #[arg(long)]
    pub max_price: Option<f64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one model by id or alias
    Show { model: String },

    /// List models, optionally filtered
    List {
        #[command(flatten)]
        filters: ListFilters,
    },

    /// List providers
    Providers,

    /// Cost a request on one model
    Cost {
        model: String,

        #[command(flatten)]
        usage: Usage,

        /// Input tokens served from the prompt cache
        #[arg(long)]
        cached: Option<u64>,
    },

    /// Cost the same request on several models
    Compare {
        #[arg(required = true, num_args = 1..)]
        models: Vec<String>,

        #[command(flatten)]
        usage: Usage,
    },

    /// Models whose cost for a request fits a dollar budget
    Budget {
        /// Maximum dollars for the request
        budget: f64,

        #[command(flatten)]
        usage: Usage,

        #[arg(long = "capability", value_delimiter = ',')]
        capabilities: Vec<ModelCapability>,
    },

    /// Cheapest paid model, optionally constrained
    Cheapest {
        #[arg(long)]
        provider: Option<ProviderId>,

        #[arg(long = "capability", value_delimiter = ',')]
        capabilities: Vec<ModelCapability>,

        /// Skip deprecated and disabled models
        #[arg(long)]
        active_only: bool,
    },

    /// Suggest models for a use case
    Recommend {
        #[arg(long)]
        budget: Option<Budget>,

        #[arg(long)]
        priority: Option<Priority>,

        #[arg(long = "capability", value_delimiter = ',')]
        capabilities: Vec<ModelCapability>,
    },

    /// Deprecated and disabled models, and upcoming shutdowns
    Deprecations {
        /// Shutdown window in days
        #[arg(long, default_value_t = DEFAULT_SHUTDOWN_WINDOW_DAYS)]
        days: u32,

        /// Reference date (YYYY-MM-DD); defaults to today in UTC
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Models with the largest context windows
    Largest {
        #[arg(long, default_value_t = DEFAULT_LARGEST_CONTEXT_LIMIT)]
        limit: usize,
    },

    /// Write the catalog as static JSON documents
    Export {
        dir: PathBuf,

        /// Stamp generatedAt with the current time
        #[arg(long)]
        restamp: bool,
    },
}

impl Command {
    /// Short name, used to label the log file.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Show { .. } => "show",
            Command::List { .. } => "list",
            Command::Providers => "providers",
            Command::Cost { .. } => "cost",
            Command::Compare { .. } => "compare",
            Command::Budget { .. } => "budget",
            Command::Cheapest { .. } => "cheapest",
            Command::Recommend { .. } => "recommend",
            Command::Deprecations { .. } => "deprecations",
            Command::Largest { .. } => "largest",
            Command::Export { .. } => "export",
        }
    }
}

pub fn cli() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(Some(cli.command.name())) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let source = CatalogSource::resolve(cli.data);
    tracing::debug!(source = ?source, command = cli.command.name(), "loading catalog");
    let catalog = source.load()?;
    let format = cli.format;

    match cli.command {
        Command::Show { model } => handle_show(&catalog, &model, format),
        Command::List { filters } => handle_list(&catalog, &filters, format),
        Command::Providers => handle_providers(&catalog, format),
        Command::Cost {
            model,
            usage,
            cached,
        } => handle_cost(&catalog, &model, usage, cached, format),
        Command::Compare { models, usage } => handle_compare(&catalog, &models, usage, format),
        Command::Budget {
            budget,
            usage,
            capabilities,
        } => handle_budget(&catalog, budget, usage, &capabilities, format),
        Command::Cheapest {
            provider,
            capabilities,
            active_only,
        } => handle_cheapest(&catalog, provider, capabilities, active_only, format),
        Command::Recommend {
            budget,
            priority,
            capabilities,
        } => handle_recommend(&catalog, budget, priority, capabilities, format),
        Command::Deprecations { days, today } => {
            let today = today.unwrap_or_else(|| chrono::Utc::now().date_naive());
            handle_deprecations(&catalog, today, days, format)
        }
        Command::Largest { limit } => handle_largest(&catalog, limit, format),
        Command::Export { dir, restamp } => handle_export(&catalog, &dir, restamp, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_list_filters() {
        let cli = Cli::try_parse_from([
            "llm-catalog",
            "list",
            "--provider",
            "anthropic",
            "--capability",
            "vision,function-calling",
            "--tag",
            "fast",
            "--tag",
            "coding",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Command::List { filters } => {
                assert_eq!(filters.provider, Some(ProviderId::Anthropic));
                assert_eq!(
                    filters.capabilities,
                    vec![ModelCapability::Vision, ModelCapability::FunctionCalling]
                );
                assert_eq!(filters.tags, vec![ModelTag::Fast, ModelTag::Coding]);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_rejects_unknown_provider() {
        assert!(Cli::try_parse_from(["llm-catalog", "list", "--provider", "acme"]).is_err());
    }

    #[test]
    fn test_deprecations_defaults() {
        let cli = Cli::try_parse_from(["llm-catalog", "deprecations"]).unwrap();
        match cli.command {
            Command::Deprecations { days, today } => {
                assert_eq!(days, DEFAULT_SHUTDOWN_WINDOW_DAYS);
                assert!(today.is_none());
            }
            _ => panic!("expected deprecations"),
        }
    }

    #[test]
    fn test_compare_needs_models() {
        assert!(Cli::try_parse_from(["llm-catalog", "compare"]).is_err());
        let cli = Cli::try_parse_from(["llm-catalog", "compare", "a", "b", "-i", "10"]).unwrap();
        assert_eq!(cli.command.name(), "compare");
    }
}
