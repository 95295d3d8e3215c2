//! Server state shared by every handler

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use shared::util::now_in;
use shared::{AppError, AppResult};

use super::config::{Config, StoreBackend};
use crate::db::repository::{DeliveryRepository, FoodRepository, OrderRepository};
use crate::db::{DocumentStore, RedbStore};

/// Cheap to clone: configuration and store sit behind `Arc`s
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn DocumentStore>,
}

impl ServerState {
    /// Open the configured store
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let store = match config.store_backend {
            StoreBackend::File => {
                std::fs::create_dir_all(&config.data_dir).map_err(|e| {
                    AppError::config(format!(
                        "Cannot create data directory {}: {e}",
                        config.data_dir.display()
                    ))
                })?;
                let path = config.database_path();
                tracing::info!(path = %path.display(), "Opening document store");
                RedbStore::open(&path)?
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory document store, data is lost on restart");
                RedbStore::open_in_memory()?
            }
        };
        Ok(Self::with_store(config.clone(), Arc::new(store)))
    }

    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Current wall-clock time in the business timezone
    pub fn now(&self) -> DateTime<FixedOffset> {
        now_in(self.config.timezone)
    }

    pub fn foods(&self) -> FoodRepository {
        FoodRepository::new(self.store.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.store.clone())
    }

    pub fn deliveries(&self) -> DeliveryRepository {
        DeliveryRepository::new(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_file_backend_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("nested").join("data"),
            ..Config::default()
        };

        let state = ServerState::initialize(&config).unwrap();
        assert!(config.database_path().exists());
        assert!(state.foods().find_all().unwrap().is_empty());
    }

    #[test]
    fn test_now_uses_business_timezone() {
        let config = Config {
            timezone: chrono_tz::Africa::Lagos,
            ..Config::in_memory()
        };
        let state = ServerState::initialize(&config).unwrap();
        assert_eq!(state.now().offset().local_minus_utc(), 3600);
    }
}
