use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use llm_catalog::{ModelRecord, ModelStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Dollar amount with enough precision for sub-cent per-request costs.
pub fn format_cost(cost: f64) -> String {
    format!("${:.6}", cost)
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_tokens(tokens: u64) -> String {
    match tokens {
        t if t >= 1_000_000 && t % 1_000_000 == 0 => format!("{}M", t / 1_000_000),
        t if t >= 1_000 && t % 1_000 == 0 => format!("{}K", t / 1_000),
        t => t.to_string(),
    }
}

/// Padded before styling so escape codes do not break column alignment.
fn styled_status(status: ModelStatus) -> String {
    let label = format!("{:<12}", status.as_str());
    match status {
        ModelStatus::Deprecated => style(label).yellow().to_string(),
        ModelStatus::Disabled => style(label).red().to_string(),
        ModelStatus::Stable => style(label).green().to_string(),
        _ => style(label).dim().to_string(),
    }
}

/// One line per model: id, provider, status, context window, total price.
pub fn model_row(model: &ModelRecord) -> String {
    let price = model
        .total_price_per_million()
        .map(format_price)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "  {:<36} {:<10} {} {:>8} {:>9}",
        model.id,
        model.provider.as_str(),
        styled_status(model.status),
        format_tokens(model.limits.context_window),
        price
    )
}

pub fn render_models(title: &str, models: &[&ModelRecord], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(models);
    }

    if models.is_empty() {
        return Ok(format!("{}\n  {}", style(title).cyan().bold(), style("none").dim()));
    }

    let mut lines = vec![format!(
        "{} {}",
        style(title).cyan().bold(),
        style(format!("({})", models.len())).dim()
    )];
    lines.extend(models.iter().map(|m| model_row(m)));
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        assert_eq!(format_tokens(1_000_000), "1M");
        assert_eq!(format_tokens(128_000), "128K");
        assert_eq!(format_tokens(16_385), "16385");
        assert_eq!(format_tokens(0), "0");
    }

    #[test]
    fn test_format_cost_keeps_small_amounts() {
        assert_eq!(format_cost(0.1625), "$0.162500");
        assert_eq!(format_price(11.25), "$11.25");
    }
}
