use anyhow::{anyhow, Result};
use console::style;

use llm_catalog::{Catalog, ModelRecord, SearchCriteria};

use crate::cli::ListFilters;
use crate::output::{format_price, format_tokens, render_models, to_json, OutputFormat};

fn aligned(label: &str, value: &str, width: usize) -> String {
    format!("  {:<width$} {}", label, value, width = width)
}

fn join_wire<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_show(catalog: &Catalog, identifier: &str, format: OutputFormat) -> Result<String> {
    let model = catalog
        .resolve(identifier)
        .ok_or_else(|| anyhow!("Model '{}' not found", identifier))?;

    if format == OutputFormat::Json {
        return to_json(model);
    }

    let width = 16;
    let mut lines = vec![format!(
        "{} {}",
        style(&model.name).cyan().bold(),
        style(format!("({})", model.id)).dim()
    )];
    lines.push(aligned("Provider:", model.provider.as_str(), width));
    lines.push(aligned("Status:", model.status.as_str(), width));
    if !model.aliases.is_empty() {
        lines.push(aligned("Aliases:", &model.aliases.join(", "), width));
    }
    if let Some(date) = model.release_date {
        lines.push(aligned("Released:", &date.to_string(), width));
    }
    lines.push(aligned(
        "Context:",
        &format_tokens(model.limits.context_window),
        width,
    ));
    lines.push(aligned(
        "Max output:",
        &format_tokens(model.limits.max_output_tokens),
        width,
    ));
    lines.push(aligned(
        "Capabilities:",
        &join_wire(&model.capabilities),
        width,
    ));
    lines.push(aligned("Tags:", &join_wire(&model.tags), width));

    match &model.pricing {
        Some(pricing) => {
            lines.push(aligned(
                "Price / 1M:",
                &format!(
                    "{} in, {} out",
                    format_price(pricing.input),
                    format_price(pricing.output)
                ),
                width,
            ));
            if let Some(cached) = pricing.cached_input {
                lines.push(aligned("Cached / 1M:", &format_price(cached), width));
            }
        }
        None => lines.push(aligned("Price:", "not published", width)),
    }

    if let Some(shutdown) = model.shutdown_date {
        lines.push(aligned(
            "Shutdown:",
            &style(shutdown).yellow().to_string(),
            width,
        ));
    }
    if let Some(replacement) = &model.replacement_model {
        lines.push(aligned("Replacement:", replacement, width));
    }
    if let Some(description) = &model.description {
        lines.push(String::new());
        lines.push(format!("  {}", description));
    }

    Ok(lines.join("\n"))
}

pub fn handle_show(catalog: &Catalog, identifier: &str, format: OutputFormat) -> Result<()> {
    println!("{}", render_show(catalog, identifier, format)?);
    Ok(())
}

impl From<&ListFilters> for SearchCriteria {
    fn from(filters: &ListFilters) -> Self {
        SearchCriteria {
            provider: filters.provider,
            status: filters.status,
            capabilities: filters.capabilities.clone(),
            tags: (!filters.tags.is_empty()).then(|| filters.tags.clone()),
            min_context_window: filters.min_context,
            max_price: filters.max_price,
        }
    }
}

pub fn handle_list(catalog: &Catalog, filters: &ListFilters, format: OutputFormat) -> Result<()> {
    let criteria = SearchCriteria::from(filters);
    let models = catalog.search(&criteria);
    tracing::info!(matched = models.len(), "listed models");
    println!("{}", render_models("Models", &models, format)?);
    Ok(())
}

pub fn render_providers(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(catalog.providers());
    }

    let mut lines = vec![format!("{}", style("Providers").cyan().bold())];
    for provider in catalog.providers() {
        let count = catalog.by_provider(provider.id).len();
        lines.push(format!(
            "  {} {:<12} {:<10} {:>3} models  {}",
            provider.icon,
            provider.name,
            provider.id.as_str(),
            count,
            style(&provider.website).dim()
        ));
    }
    Ok(lines.join("\n"))
}

pub fn handle_providers(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    println!("{}", render_providers(catalog, format)?);
    Ok(())
}

pub fn handle_largest(catalog: &Catalog, limit: usize, format: OutputFormat) -> Result<()> {
    let models: Vec<&ModelRecord> = catalog.largest_context(limit);
    println!("{}", render_models("Largest context windows", &models, format)?);
    Ok(())
}
