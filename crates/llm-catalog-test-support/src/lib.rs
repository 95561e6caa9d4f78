pub mod builder;
pub mod fixtures;

pub use builder::ModelBuilder;
pub use fixtures::{
    fixture_catalog, fixture_database, fixture_metadata, fixture_models, fixture_today,
    provider_record, write_fixture_file, FIXTURE_VERSION,
};
