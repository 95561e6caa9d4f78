use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

use crate::catalog::{Catalog, ModelRecord, ModelStatus};

pub const DEFAULT_SHUTDOWN_WINDOW_DAYS: u32 = 90;

/// Lifecycle summary for a model identifier. Unknown identifiers report as
/// neither deprecated nor disabled, with no dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationInfo {
    pub is_deprecated: bool,
    pub is_disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shutdown_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement_model: Option<String>,
}

impl From<&ModelRecord> for DeprecationInfo {
    fn from(model: &ModelRecord) -> Self {
        Self {
            is_deprecated: model.status == ModelStatus::Deprecated,
            is_disabled: model.status == ModelStatus::Disabled,
            deprecation_date: model.deprecation_date,
            shutdown_date: model.shutdown_date,
            replacement_model: model.replacement_model.clone(),
        }
    }
}

impl Catalog {
    pub fn active_models(&self) -> Vec<&ModelRecord> {
        self.models().iter().filter(|m| m.is_active()).collect()
    }

    pub fn deprecated_models(&self) -> Vec<&ModelRecord> {
        self.by_status(ModelStatus::Deprecated)
    }

    pub fn disabled_models(&self) -> Vec<&ModelRecord> {
        self.by_status(ModelStatus::Disabled)
    }

    /// Follows the model's `replacementModel` through the same id/alias
    /// lookup. `None` if either step fails to resolve.
    pub fn replacement_model(&self, model_id: &str) -> Option<&ModelRecord> {
        let replacement = self.resolve(model_id)?.replacement_model.as_deref()?;
        self.resolve(replacement)
    }

    pub fn is_model_deprecated(&self, model_id: &str) -> DeprecationInfo {
        self.resolve(model_id)
            .map(DeprecationInfo::from)
            .unwrap_or_default()
    }

    /// Models whose shutdown date falls within `days` of today (UTC).
    pub fn models_shutting_down_soon(&self, days: u32) -> Vec<&ModelRecord> {
        self.models_shutting_down_between(Utc::now().date_naive(), days)
    }

    /// Models with a shutdown date in `[today, today + days]`, both ends
    /// inclusive. Models without a shutdown date never match.
    pub fn models_shutting_down_between(&self, today: NaiveDate, days: u32) -> Vec<&ModelRecord> {
        let horizon = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        self.models()
            .iter()
            .filter(|m| {
                m.shutdown_date
                    .is_some_and(|shutdown| shutdown >= today && shutdown <= horizon)
            })
            .collect()
    }
}
