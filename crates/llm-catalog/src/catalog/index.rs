use std::collections::HashMap;

use super::model::ModelRecord;
use crate::errors::CatalogError;

/// Maps every model id and alias to the position of its record.
///
/// Built once when the catalog is constructed. Every identifier must name
/// exactly one model; a collision aborts construction instead of letting the
/// first table entry silently win.
#[derive(Debug, Clone, Default)]
pub(crate) struct LookupIndex {
    entries: HashMap<String, usize>,
}

impl LookupIndex {
    pub(crate) fn build(models: &[ModelRecord]) -> Result<Self, CatalogError> {
        let mut entries = HashMap::with_capacity(models.len() * 2);

        // Ids first, so a duplicate id is reported as such rather than as an
        // alias collision.
        for (position, model) in models.iter().enumerate() {
            if entries.insert(model.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateModelId(model.id.clone()));
            }
        }

        for (position, model) in models.iter().enumerate() {
            for alias in &model.aliases {
                match entries.get(alias) {
                    // Repeating the model's own id or alias is redundant, not ambiguous.
                    Some(&existing) if existing == position => {}
                    Some(&existing) => {
                        return Err(CatalogError::AliasCollision {
                            alias: alias.clone(),
                            first: models[existing].id.clone(),
                            second: model.id.clone(),
                        });
                    }
                    None => {
                        entries.insert(alias.clone(), position);
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    pub(crate) fn position(&self, identifier: &str) -> Option<usize> {
        self.entries.get(identifier).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
