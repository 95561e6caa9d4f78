mod index;
mod model;
mod provider;
mod store;

pub(crate) use model::parse_wire;

pub use model::{ModelCapability, ModelLimits, ModelPricing, ModelRecord, ModelStatus, ModelTag};
pub use provider::{ProviderId, ProviderRecord};
pub use store::{Catalog, CatalogDatabase, CatalogMetadata};
