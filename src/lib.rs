pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{build_repository, seed::SeedConfig};
pub use core::{
    engine::{OutputFormat, Query, QueryEngine, QueryReport},
    operators::ReactiveStreamExt,
    repository::InMemoryPersonRepository,
};
pub use domain::{
    model::{seed_persons, Person},
    ports::{ConfigProvider, PersonRepository, PersonStream},
};
pub use utils::error::{DirectoryError, Result};
