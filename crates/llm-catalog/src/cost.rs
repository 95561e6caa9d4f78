//! Dollar cost arithmetic over a model's per-million-token prices.
//!
//! Results are never rounded; format them at display time.

use serde::Serialize;

use crate::catalog::{Catalog, ModelCapability, ModelPricing, ModelRecord};

pub const TOKENS_PER_PRICE_UNIT: f64 = 1_000_000.0;

fn token_cost(tokens: u64, price_per_million: f64) -> f64 {
    (tokens as f64 / TOKENS_PER_PRICE_UNIT) * price_per_million
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedCostBreakdown {
    pub input_cost: f64,
    pub cached_input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostComparison {
    /// The identifier as the caller passed it, which may be an alias
    pub model_id: String,
    pub model_name: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetMatch<'a> {
    pub model: &'a ModelRecord,
    pub cost: CostBreakdown,
}

impl ModelPricing {
    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> CostBreakdown {
        let input_cost = token_cost(input_tokens, self.input);
        let output_cost = token_cost(output_tokens, self.output);
        CostBreakdown {
            input_cost,
            output_cost,
            total_cost: input_cost + output_cost,
        }
    }

    /// Cached tokens are billed at `cached_input`; without a cached rate
    /// they cost nothing.
    pub fn cost_with_cache(
        &self,
        input_tokens: u64,
        cached_input_tokens: u64,
        output_tokens: u64,
    ) -> CachedCostBreakdown {
        let input_cost = token_cost(input_tokens, self.input);
        let cached_input_cost = self
            .cached_input
            .map(|rate| token_cost(cached_input_tokens, rate))
            .unwrap_or(0.0);
        let output_cost = token_cost(output_tokens, self.output);
        CachedCostBreakdown {
            input_cost,
            cached_input_cost,
            output_cost,
            total_cost: input_cost + cached_input_cost + output_cost,
        }
    }
}

impl Catalog {
    /// `None` when the model does not resolve or has no pricing.
    pub fn calculate_cost(
        &self,
        model_id: &str,
        input_tokens: u64,
        output_tokens: u64,
    ) -> Option<CostBreakdown> {
        let pricing = self.resolve(model_id)?.pricing.as_ref()?;
        Some(pricing.cost(input_tokens, output_tokens))
    }

    pub fn calculate_cost_with_cache(
        &self,
        model_id: &str,
        input_tokens: u64,
        cached_input_tokens: u64,
        output_tokens: u64,
    ) -> Option<CachedCostBreakdown> {
        let pricing = self.resolve(model_id)?.pricing.as_ref()?;
        Some(pricing.cost_with_cache(input_tokens, cached_input_tokens, output_tokens))
    }

    /// Costs the same usage on each model. Identifiers that cannot be costed
    /// are dropped; survivors keep input order.
    pub fn compare_costs<I, S>(
        &self,
        model_ids: I,
        input_tokens: u64,
        output_tokens: u64,
    ) -> Vec<CostComparison>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        model_ids
            .into_iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let model = self.resolve(id)?;
                let cost = model.pricing.as_ref()?.cost(input_tokens, output_tokens);
                Some(CostComparison {
                    model_id: id.to_string(),
                    model_name: model.name.clone(),
                    cost: cost.total_cost,
                })
            })
            .collect()
    }

    /// Priced models whose cost for the given usage fits in `budget`, most
    /// expensive first so the strongest affordable option leads.
    pub fn models_within_budget(
        &self,
        budget: f64,
        input_tokens: u64,
        output_tokens: u64,
        required: &[ModelCapability],
    ) -> Vec<BudgetMatch<'_>> {
        let mut matches: Vec<BudgetMatch<'_>> = self
            .models()
            .iter()
            .filter(|m| m.has_all_capabilities(required))
            .filter_map(|model| {
                let cost = model.pricing.as_ref()?.cost(input_tokens, output_tokens);
                (cost.total_cost <= budget).then_some(BudgetMatch { model, cost })
            })
            .collect();

        matches.sort_by(|a, b| b.cost.total_cost.total_cmp(&a.cost.total_cost));
        matches
    }
}
