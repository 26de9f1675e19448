#[cfg(feature = "cli")]
pub mod cli;
pub mod seed;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::repository::InMemoryPersonRepository;
use crate::core::{ConfigProvider, Result};
use seed::SeedConfig;

/// 依設定建立 repository：有 seed 檔就載入，否則使用內建的三筆資料
pub fn build_repository<C: ConfigProvider>(config: &C) -> Result<InMemoryPersonRepository> {
    match config.seed_file() {
        Some(path) => {
            tracing::info!("Loading persons from seed file: {}", path);
            let seed = SeedConfig::from_file(path)?;
            seed.into_repository()
        }
        None => {
            tracing::debug!("Using built-in seed records");
            Ok(InMemoryPersonRepository::seeded())
        }
    }
}
