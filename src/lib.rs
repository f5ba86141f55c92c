//! Minimal shop backend: product catalog CRUD and stock-checked order placement
//! over a Postgres or in-memory store.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod orders;
pub mod persistence;
pub mod store;
pub mod telemetry;
pub mod types;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::persistence::PgStore;
use crate::store::{MemoryStore, SharedStore};

/// Open the store selected by `config`: Postgres (migrated) when a database
/// URL is configured, otherwise a fresh in-memory store.
pub async fn open_store(config: &AppConfig) -> Result<SharedStore> {
    match &config.database {
        Some(database) => {
            let pool = persistence::create_pool_and_migrate(database).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory store (data is not persisted)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
