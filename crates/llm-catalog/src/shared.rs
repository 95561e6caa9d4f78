use std::sync::{Arc, RwLock};

use crate::catalog::Catalog;

/// A catalog handle that can be shared across threads and replaced whole.
///
/// Readers take an `Arc` snapshot and keep querying it even if a newer
/// catalog is swapped in meanwhile; the table and its lookup index are
/// always replaced together.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn load(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Installs `catalog` and returns the one it replaced.
    pub fn swap(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(
            from = %previous.metadata().version,
            to = %guard.metadata().version,
            models = guard.len(),
            "catalog swapped"
        );
        previous
    }
}
