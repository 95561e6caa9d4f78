use anyhow::Result;
use chrono::NaiveDate;
use console::style;
use serde::Serialize;

use llm_catalog::{Catalog, DeprecationInfo, ModelRecord};

use crate::output::{to_json, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LifecycleEntry<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(flatten)]
    info: DeprecationInfo,
}

impl<'a> From<&'a ModelRecord> for LifecycleEntry<'a> {
    fn from(model: &'a ModelRecord) -> Self {
        Self {
            id: &model.id,
            name: &model.name,
            info: DeprecationInfo::from(model),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LifecycleReport<'a> {
    today: NaiveDate,
    window_days: u32,
    shutting_down: Vec<LifecycleEntry<'a>>,
    deprecated: Vec<LifecycleEntry<'a>>,
    disabled: Vec<LifecycleEntry<'a>>,
}

fn entries(models: Vec<&ModelRecord>) -> Vec<LifecycleEntry<'_>> {
    models.into_iter().map(LifecycleEntry::from).collect()
}

fn entry_line(catalog: &Catalog, entry: &LifecycleEntry<'_>) -> String {
    let shutdown = entry
        .info
        .shutdown_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let replacement = match catalog.replacement_model(entry.id) {
        Some(model) => format!("-> {}", model.id),
        None => match &entry.info.replacement_model {
            Some(unresolved) => format!("-> {} (unknown)", unresolved),
            None => String::new(),
        },
    };
    format!("  {:<36} {:<12} {}", entry.id, shutdown, replacement)
}

pub fn render_deprecations(
    catalog: &Catalog,
    today: NaiveDate,
    days: u32,
    format: OutputFormat,
) -> Result<String> {
    let report = LifecycleReport {
        today,
        window_days: days,
        shutting_down: entries(catalog.models_shutting_down_between(today, days)),
        deprecated: entries(catalog.deprecated_models()),
        disabled: entries(catalog.disabled_models()),
    };

    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut lines = Vec::new();
    let sections = [
        (
            format!("Shutting down within {} days of {}", days, today),
            &report.shutting_down,
        ),
        ("Deprecated".to_string(), &report.deprecated),
        ("Disabled".to_string(), &report.disabled),
    ];
    for (title, section) in sections {
        lines.push(format!("{}", style(title).cyan().bold()));
        if section.is_empty() {
            lines.push(format!("  {}", style("none").dim()));
        }
        lines.extend(section.iter().map(|e| entry_line(catalog, e)));
    }
    Ok(lines.join("\n"))
}

pub fn handle_deprecations(
    catalog: &Catalog,
    today: NaiveDate,
    days: u32,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render_deprecations(catalog, today, days, format)?);
    Ok(())
}
