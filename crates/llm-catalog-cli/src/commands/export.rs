use std::path::Path;

use anyhow::Result;
use console::style;

use llm_catalog::export::{export_json, ExportOptions};
use llm_catalog::Catalog;

use crate::output::{to_json, OutputFormat};

pub fn handle_export(
    catalog: &Catalog,
    dir: &Path,
    restamp: bool,
    format: OutputFormat,
) -> Result<()> {
    let summary = export_json(catalog, dir, &ExportOptions { restamp })?;

    if format == OutputFormat::Json {
        let files: Vec<String> = summary
            .files
            .iter()
            .map(|f| f.display().to_string())
            .collect();
        println!("{}", to_json(&files)?);
        return Ok(());
    }

    for file in &summary.files {
        println!("{} {}", style("✓").green(), file.display());
    }
    println!(
        "Exported {} models from {} providers to {}",
        summary.models,
        summary.providers,
        style(dir.display()).cyan()
    );
    Ok(())
}
