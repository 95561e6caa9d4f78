use chrono::NaiveDate;
use llm_catalog::{
    ModelCapability, ModelLimits, ModelPricing, ModelRecord, ModelStatus, ModelTag, ProviderId,
};

/// Builds a [`ModelRecord`] with sensible defaults: stable, 128k context,
/// 4k output, chat capabilities and no pricing.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    record: ModelRecord,
}

impl ModelBuilder {
    pub fn new(id: &str, provider: ProviderId) -> Self {
        Self {
            record: ModelRecord {
                id: id.to_string(),
                aliases: Vec::new(),
                name: id.to_string(),
                provider,
                release_date: None,
                status: ModelStatus::Stable,
                capabilities: vec![ModelCapability::TextGeneration, ModelCapability::Chat],
                tags: Vec::new(),
                limits: ModelLimits::new(128_000, 4_096),
                pricing: None,
                description: None,
                docs_url: None,
                deprecation_date: None,
                shutdown_date: None,
                replacement_model: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.record.aliases.push(alias.to_string());
        self
    }

    pub fn status(mut self, status: ModelStatus) -> Self {
        self.record.status = status;
        self
    }

    /// Adds to the default chat capabilities.
    pub fn capabilities(mut self, capabilities: impl IntoIterator<Item = ModelCapability>) -> Self {
        for capability in capabilities {
            if !self.record.capabilities.contains(&capability) {
                self.record.capabilities.push(capability);
            }
        }
        self
    }

    /// Replaces the capability list outright.
    pub fn only_capabilities(
        mut self,
        capabilities: impl IntoIterator<Item = ModelCapability>,
    ) -> Self {
        self.record.capabilities = capabilities.into_iter().collect();
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = ModelTag>) -> Self {
        self.record.tags.extend(tags);
        self
    }

    pub fn context_window(mut self, tokens: u64) -> Self {
        self.record.limits.context_window = tokens;
        self
    }

    pub fn max_output_tokens(mut self, tokens: u64) -> Self {
        self.record.limits.max_output_tokens = tokens;
        self
    }

    pub fn pricing(mut self, input: f64, output: f64) -> Self {
        self.record.pricing = Some(ModelPricing::new(input, output));
        self
    }

    /// Requires `pricing` to have been set first.
    pub fn cached_input(mut self, rate: f64) -> Self {
        let pricing = self
            .record
            .pricing
            .take()
            .expect("cached_input needs pricing set first");
        self.record.pricing = Some(pricing.with_cached_input(rate));
        self
    }

    pub fn deprecated(mut self, on: NaiveDate) -> Self {
        self.record.status = ModelStatus::Deprecated;
        self.record.deprecation_date = Some(on);
        self
    }

    pub fn shutdown(mut self, on: NaiveDate) -> Self {
        self.record.shutdown_date = Some(on);
        self
    }

    pub fn replacement(mut self, model_id: &str) -> Self {
        self.record.replacement_model = Some(model_id.to_string());
        self
    }

    pub fn build(self) -> ModelRecord {
        self.record
    }
}
