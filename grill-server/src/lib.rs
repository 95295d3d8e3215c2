//! Holy Grills ordering service
//!
//! # Modules
//!
//! - [`core`] - configuration, shared state, server lifecycle
//! - [`db`] - document store and per-collection repositories
//! - [`api`] - HTTP routes and handlers
//! - [`utils`] - logging and request extractors

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use core::{Config, Server, ServerState, StoreBackend};
pub use db::{Collection, DocumentStore, RedbStore, StoreError};

/// Load `.env`, read the configuration and install logging from it
pub fn setup_environment() -> shared::AppResult<Config> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = Config::from_env()?;
    utils::init_logger(&config.log_level, config.log_dir.as_deref());

    if dotenv_loaded {
        tracing::debug!("Loaded .env");
    }
    config.log_fallbacks();
    Ok(config)
}
