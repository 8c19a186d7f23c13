use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{AppConfig, StorageBackend};
use crate::database::manager::DatabaseManager;
use crate::database::memory::{MemoryTodoStore, MemoryUserStore};
use crate::database::postgres::{self, PgTodoStore, PgUserStore};
use crate::database::store::{TodoStore, UserStore};

/// Application state handed to every handler.
///
/// The stores are explicitly owned trait objects selected at startup; the
/// pool is present only for the Postgres backend (used by the health check).
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub todos: Arc<dyn TodoStore>,
    pub pool: Option<PgPool>,
}

impl AppState {
    /// Volatile in-memory backend: development fallback and test harness.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            todos: Arc::new(MemoryTodoStore::new()),
            pool: None,
        }
    }

    /// Build state for the configured backend, connecting and preparing the
    /// database when Postgres is selected.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => {
                tracing::info!("using in-memory storage backend");
                Ok(Self::in_memory())
            }
            StorageBackend::Postgres => {
                let pool = DatabaseManager::connect().await?;
                postgres::ensure_schema(&pool).await?;
                tracing::info!("using postgres storage backend");

                Ok(Self {
                    users: Arc::new(PgUserStore::new(pool.clone())),
                    todos: Arc::new(PgTodoStore::new(pool.clone())),
                    pool: Some(pool),
                })
            }
        }
    }
}
