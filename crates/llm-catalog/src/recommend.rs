use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::parse_wire;
use crate::catalog::{Catalog, ModelCapability, ModelRecord, ModelTag, ProviderId};

pub const RECOMMENDATION_LIMIT: usize = 5;

/// Candidates for "cheapest" must carry a strictly positive input price.
/// Zero-priced entries are free tiers or experiments, not a meaningful
/// cheapest option.
pub fn has_paid_pricing(model: &ModelRecord) -> bool {
    model.pricing.as_ref().is_some_and(|p| p.input > 0.0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheapestOptions {
    #[serde(default)]
    pub provider: Option<ProviderId>,

    /// Every capability must be present
    #[serde(default)]
    pub capabilities: Vec<ModelCapability>,

    #[serde(default)]
    pub active_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Budget::Low => write!(f, "low"),
            Budget::Medium => write!(f, "medium"),
            Budget::High => write!(f, "high"),
        }
    }
}

impl FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("budget", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Speed,
    Quality,
    Balanced,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Speed => write!(f, "speed"),
            Priority::Quality => write!(f, "quality"),
            Priority::Balanced => write!(f, "balanced"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire("priority", s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    #[serde(default)]
    pub budget: Option<Budget>,

    #[serde(default)]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub capabilities: Vec<ModelCapability>,
}

impl Budget {
    fn admits(&self, model: &ModelRecord) -> bool {
        match self {
            Budget::Low => model.has_tag(ModelTag::CostEffective),
            Budget::Medium => true,
            Budget::High => model.has_tag(ModelTag::Flagship),
        }
    }
}

impl Priority {
    fn admits(&self, model: &ModelRecord) -> bool {
        match self {
            Priority::Speed => model.has_tag(ModelTag::Fast),
            Priority::Quality => model.has_any_tag(&[ModelTag::Flagship, ModelTag::Reasoning]),
            Priority::Balanced => model.has_tag(ModelTag::Balanced),
        }
    }
}

fn sort_by_total_price(models: &mut [&ModelRecord]) {
    models.sort_by(|a, b| {
        let a = a.total_price_per_million().unwrap_or(0.0);
        let b = b.total_price_per_million().unwrap_or(0.0);
        a.total_cmp(&b)
    });
}

impl Catalog {
    /// Lowest input + output price among paid models matching `options`.
    /// Ties go to the earlier table entry.
    pub fn cheapest_model(&self, options: &CheapestOptions) -> Option<&ModelRecord> {
        let mut candidates: Vec<&ModelRecord> = self
            .models()
            .iter()
            .filter(|m| has_paid_pricing(m))
            .filter(|m| options.provider.map_or(true, |p| m.provider == p))
            .filter(|m| m.has_all_capabilities(&options.capabilities))
            .filter(|m| !options.active_only || m.is_active())
            .collect();

        sort_by_total_price(&mut candidates);
        candidates.first().copied()
    }

    /// Highest input + output price among all priced models, zero-priced
    /// ones included.
    pub fn most_expensive_model(&self) -> Option<&ModelRecord> {
        let mut priced: Vec<&ModelRecord> = self
            .models()
            .iter()
            .filter(|m| m.pricing.is_some())
            .collect();

        priced.sort_by(|a, b| {
            let a = a.total_price_per_million().unwrap_or(0.0);
            let b = b.total_price_per_million().unwrap_or(0.0);
            b.total_cmp(&a)
        });
        priced.first().copied()
    }

    /// Narrows the active models by capability, then budget, then priority,
    /// and returns the first few survivors in table order.
    ///
    /// This is rule chaining, not scoring: the filter order decides which
    /// models survive when tags overlap.
    pub fn recommended_models(&self, use_case: &UseCase) -> Vec<&ModelRecord> {
        self.active_models()
            .into_iter()
            .filter(|m| m.has_all_capabilities(&use_case.capabilities))
            .filter(|m| use_case.budget.map_or(true, |b| b.admits(m)))
            .filter(|m| use_case.priority.map_or(true, |p| p.admits(m)))
            .take(RECOMMENDATION_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_parses_wire_names() {
        let use_case: UseCase = serde_json::from_str(
            r#"{"budget":"low","priority":"speed","capabilities":["function-calling"]}"#,
        )
        .unwrap();
        assert_eq!(use_case.budget, Some(Budget::Low));
        assert_eq!(use_case.priority, Some(Priority::Speed));
        assert_eq!("quality".parse::<Priority>(), Ok(Priority::Quality));
        assert!("cheap".parse::<Budget>().is_err());
    }

    #[test]
    fn test_bundled_cheapest_active_model_is_paid() {
        let catalog = Catalog::bundled().unwrap();
        let cheapest = catalog
            .cheapest_model(&CheapestOptions {
                active_only: true,
                ..Default::default()
            })
            .unwrap();
        assert!(cheapest.is_active());
        assert!(has_paid_pricing(cheapest));
    }
}
