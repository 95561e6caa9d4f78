use anyhow::Result;
use llm_catalog_cli::cli::cli;

fn main() -> Result<()> {
    cli()
}
