use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ModelCapability, ModelRecord, ModelStatus, ModelTag, ProviderId};

pub const DEFAULT_LARGEST_CONTEXT_LIMIT: usize = 5;

/// Conjunctive search over the catalog. Unset fields do not filter.
///
/// `capabilities` and `tags` deliberately differ: a model must have *all*
/// listed capabilities but only *one* of the listed tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub provider: Option<ProviderId>,

    #[serde(default)]
    pub status: Option<ModelStatus>,

    /// Every capability must be present
    #[serde(default)]
    pub capabilities: Vec<ModelCapability>,

    /// At least one tag must be present. `None` does not filter; an empty
    /// list matches nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ModelTag>>,

    /// Minimum `contextWindow`, inclusive
    #[serde(default)]
    pub min_context_window: Option<u64>,

    /// Ceiling on input + output price per million tokens, inclusive.
    /// Unpriced models never pass; a ceiling of zero or less is ignored.
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    pub fn matches(&self, model: &ModelRecord) -> bool {
        if let Some(provider) = self.provider {
            if model.provider != provider {
                return false;
            }
        }

        if let Some(status) = self.status {
            if model.status != status {
                return false;
            }
        }

        if !model.has_all_capabilities(&self.capabilities) {
            return false;
        }

        if let Some(tags) = &self.tags {
            if !model.has_any_tag(tags) {
                return false;
            }
        }

        if let Some(min) = self.min_context_window {
            if model.limits.context_window < min {
                return false;
            }
        }

        match self.max_price {
            Some(ceiling) if ceiling > 0.0 => model
                .total_price_per_million()
                .is_some_and(|total| total <= ceiling),
            _ => true,
        }
    }
}

impl Catalog {
    fn filter_models<F>(&self, predicate: F) -> Vec<&ModelRecord>
    where
        F: Fn(&ModelRecord) -> bool,
    {
        self.models().iter().filter(|m| predicate(m)).collect()
    }

    pub fn by_provider(&self, provider: ProviderId) -> Vec<&ModelRecord> {
        self.filter_models(|m| m.provider == provider)
    }

    pub fn by_tag(&self, tag: ModelTag) -> Vec<&ModelRecord> {
        self.filter_models(|m| m.has_tag(tag))
    }

    pub fn by_capability(&self, capability: ModelCapability) -> Vec<&ModelRecord> {
        self.filter_models(|m| m.has_capability(capability))
    }

    pub fn by_status(&self, status: ModelStatus) -> Vec<&ModelRecord> {
        self.filter_models(|m| m.status == status)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&ModelRecord> {
        self.filter_models(|m| criteria.matches(m))
    }

    /// The `limit` models with the widest context window, widest first.
    /// Equal windows keep table order.
    pub fn largest_context(&self, limit: usize) -> Vec<&ModelRecord> {
        let mut models: Vec<&ModelRecord> = self.models().iter().collect();
        models.sort_by(|a, b| b.limits.context_window.cmp(&a.limits.context_window));
        models.truncate(limit);
        models
    }
}
