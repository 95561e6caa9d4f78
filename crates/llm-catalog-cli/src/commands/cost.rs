use anyhow::{anyhow, Result};
use console::style;
use serde::Serialize;

use llm_catalog::{
    Budget, Catalog, CheapestOptions, ModelCapability, Priority, ProviderId, UseCase,
};

use crate::cli::Usage;
use crate::output::{format_cost, model_row, render_models, to_json, OutputFormat};

fn usage_line(usage: Usage) -> String {
    style(format!(
        "{} input / {} output tokens",
        usage.input, usage.output
    ))
    .dim()
    .to_string()
}

pub fn render_cost(
    catalog: &Catalog,
    identifier: &str,
    usage: Usage,
    cached: Option<u64>,
    format: OutputFormat,
) -> Result<String> {
    let model = catalog
        .resolve(identifier)
        .ok_or_else(|| anyhow!("Model '{}' not found", identifier))?;
    if model.pricing.is_none() {
        return Err(anyhow!("Model '{}' has no published pricing", model.id));
    }

    let Some(cached_tokens) = cached else {
        let cost = catalog
            .calculate_cost(identifier, usage.input, usage.output)
            .ok_or_else(|| anyhow!("Model '{}' cannot be costed", identifier))?;
        if format == OutputFormat::Json {
            return to_json(&cost);
        }
        return Ok([
            format!("{} {}", style(&model.name).cyan().bold(), usage_line(usage)),
            format!("  Input:  {}", format_cost(cost.input_cost)),
            format!("  Output: {}", format_cost(cost.output_cost)),
            format!("  Total:  {}", style(format_cost(cost.total_cost)).bold()),
        ]
        .join("\n"));
    };

    let cost = catalog
        .calculate_cost_with_cache(identifier, usage.input, cached_tokens, usage.output)
        .ok_or_else(|| anyhow!("Model '{}' cannot be costed", identifier))?;
    if format == OutputFormat::Json {
        return to_json(&cost);
    }
    Ok([
        format!("{} {}", style(&model.name).cyan().bold(), usage_line(usage)),
        format!("  Input:  {}", format_cost(cost.input_cost)),
        format!(
            "  Cached: {} {}",
            format_cost(cost.cached_input_cost),
            style(format!("({} tokens)", cached_tokens)).dim()
        ),
        format!("  Output: {}", format_cost(cost.output_cost)),
        format!("  Total:  {}", style(format_cost(cost.total_cost)).bold()),
    ]
    .join("\n"))
}

pub fn handle_cost(
    catalog: &Catalog,
    identifier: &str,
    usage: Usage,
    cached: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render_cost(catalog, identifier, usage, cached, format)?);
    Ok(())
}

pub fn render_compare(
    catalog: &Catalog,
    identifiers: &[String],
    usage: Usage,
    format: OutputFormat,
) -> Result<String> {
    let comparison = catalog.compare_costs(identifiers, usage.input, usage.output);
    for identifier in identifiers {
        if !comparison.iter().any(|c| &c.model_id == identifier) {
            tracing::warn!(model = %identifier, "skipped: unknown or unpriced");
        }
    }

    if format == OutputFormat::Json {
        return to_json(&comparison);
    }

    let mut lines = vec![format!(
        "{} {}",
        style("Cost comparison").cyan().bold(),
        usage_line(usage)
    )];
    for entry in &comparison {
        lines.push(format!(
            "  {:<36} {:<28} {:>14}",
            entry.model_id,
            entry.model_name,
            format_cost(entry.cost)
        ));
    }
    let skipped = identifiers.len() - comparison.len();
    if skipped > 0 {
        lines.push(format!(
            "  {}",
            style(format!("{} model(s) skipped: unknown or unpriced", skipped)).yellow()
        ));
    }
    Ok(lines.join("\n"))
}

pub fn handle_compare(
    catalog: &Catalog,
    identifiers: &[String],
    usage: Usage,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render_compare(catalog, identifiers, usage, format)?);
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetRow<'a> {
    id: &'a str,
    name: &'a str,
    total_cost: f64,
}

pub fn render_budget(
    catalog: &Catalog,
    budget: f64,
    usage: Usage,
    capabilities: &[ModelCapability],
    format: OutputFormat,
) -> Result<String> {
    let matches = catalog.models_within_budget(budget, usage.input, usage.output, capabilities);

    if format == OutputFormat::Json {
        let rows: Vec<BudgetRow<'_>> = matches
            .iter()
            .map(|m| BudgetRow {
                id: &m.model.id,
                name: &m.model.name,
                total_cost: m.cost.total_cost,
            })
            .collect();
        return to_json(&rows);
    }

    let mut lines = vec![format!(
        "{} {} {}",
        style("Within").cyan().bold(),
        style(format_cost(budget)).cyan().bold(),
        usage_line(usage)
    )];
    if matches.is_empty() {
        lines.push(format!("  {}", style("none").dim()));
    }
    for m in &matches {
        lines.push(format!(
            "  {:<36} {:>14}",
            m.model.id,
            format_cost(m.cost.total_cost)
        ));
    }
    Ok(lines.join("\n"))
}

pub fn handle_budget(
    catalog: &Catalog,
    budget: f64,
    usage: Usage,
    capabilities: &[ModelCapability],
    format: OutputFormat,
) -> Result<()> {
    println!(
        "{}",
        render_budget(catalog, budget, usage, capabilities, format)?
    );
    Ok(())
}

pub fn handle_cheapest(
    catalog: &Catalog,
    provider: Option<ProviderId>,
    capabilities: Vec<ModelCapability>,
    active_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let options = CheapestOptions {
        provider,
        capabilities,
        active_only,
    };
    let model = catalog
        .cheapest_model(&options)
        .ok_or_else(|| anyhow!("No paid model matches those constraints"))?;

    if format == OutputFormat::Json {
        println!("{}", to_json(model)?);
    } else {
        println!("{}", style("Cheapest").cyan().bold());
        println!("{}", model_row(model));
    }
    Ok(())
}

pub fn handle_recommend(
    catalog: &Catalog,
    budget: Option<Budget>,
    priority: Option<Priority>,
    capabilities: Vec<ModelCapability>,
    format: OutputFormat,
) -> Result<()> {
    let use_case = UseCase {
        budget,
        priority,
        capabilities,
    };
    let models = catalog.recommended_models(&use_case);
    println!("{}", render_models("Recommended", &models, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_catalog_test_support::fixture_catalog;

    fn usage(input: u64, output: u64) -> Usage {
        Usage { input, output }
    }

    #[test]
    fn test_cost_text() {
        let catalog = fixture_catalog();
        let text = render_cost(&catalog, "alpha", usage(50_000, 10_000), None, OutputFormat::Text)
            .unwrap();
        assert!(text.contains("Alpha Large"));
        assert!(text.contains("$0.800000"));
    }

    #[test]
    fn test_cost_with_cache_json() {
        let catalog = fixture_catalog();
        let json = render_cost(
            &catalog,
            "beta-pro",
            usage(1_000_000, 1_000_000),
            Some(1_000_000),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!((value["cachedInputCost"].as_f64().unwrap() - 0.3).abs() < 1e-9);
        assert!((value["totalCost"].as_f64().unwrap() - 18.3).abs() < 1e-9);
    }

    #[test]
    fn test_cost_errors_name_the_problem() {
        let catalog = fixture_catalog();
        let err = render_cost(&catalog, "missing", usage(1, 1), None, OutputFormat::Text)
            .unwrap_err();
        assert!(err.to_string().contains("not found"));

        let err = render_cost(&catalog, "gamma-embed", usage(1, 1), None, OutputFormat::Text)
            .unwrap_err();
        assert!(err.to_string().contains("no published pricing"));
    }

    #[test]
    fn test_compare_reports_skipped_models() {
        let catalog = fixture_catalog();
        let ids = vec![
            "alpha".to_string(),
            "missing".to_string(),
            "beta-pro".to_string(),
        ];
        let text =
            render_compare(&catalog, &ids, usage(1_000_000, 1_000_000), OutputFormat::Text)
                .unwrap();
        assert!(text.contains("1 model(s) skipped"));

        let json =
            render_compare(&catalog, &ids, usage(1_000_000, 1_000_000), OutputFormat::Json)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["modelId"], "alpha");
    }

    #[test]
    fn test_budget_json_rows() {
        let catalog = fixture_catalog();
        let json = render_budget(
            &catalog,
            20.0,
            usage(1_000_000, 1_000_000),
            &[ModelCapability::Vision],
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "beta-pro");
        assert_eq!(value[1]["id"], "gamma-long");
    }
}
