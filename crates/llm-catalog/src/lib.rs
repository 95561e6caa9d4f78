//! A curated, versioned catalog of AI language models and their providers,
//! with lookup, search, cost calculation and lifecycle queries over it.
//!
//! Every query is a method on [`Catalog`], an immutable table built once and
//! validated on construction.

pub mod catalog;
pub mod config;
pub mod cost;
pub mod errors;
pub mod export;
pub mod lifecycle;
pub mod query;
pub mod recommend;
pub mod shared;

pub use catalog::{
    Catalog, CatalogDatabase, CatalogMetadata, ModelCapability, ModelLimits, ModelPricing,
    ModelRecord, ModelStatus, ModelTag, ProviderId, ProviderRecord,
};
pub use config::CatalogSource;
pub use cost::{BudgetMatch, CachedCostBreakdown, CostBreakdown, CostComparison};
pub use errors::CatalogError;
pub use lifecycle::DeprecationInfo;
pub use query::SearchCriteria;
pub use recommend::{Budget, CheapestOptions, Priority, UseCase};
pub use shared::SharedCatalog;
