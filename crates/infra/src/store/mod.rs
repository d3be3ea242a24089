//! History store adapters

pub mod json_store;
pub mod manager;
pub mod sqlite_store;

use std::sync::Arc;

use duosync_core::HistoryStore;
use duosync_domain::{DuoSyncError, Result, StoreBackend, StoreConfig};
use tokio::task;

pub use json_store::JsonHistoryStore;
pub use manager::DbManager;
pub use sqlite_store::SqliteHistoryStore;

/// Build the store selected by `config.backend`.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn HistoryStore>> {
    Ok(match config.backend {
        StoreBackend::Json => Arc::new(JsonHistoryStore::new(&config.path)),
        StoreBackend::Sqlite => Arc::new(SqliteHistoryStore::open(&config.path)?),
    })
}

pub(crate) fn map_join_error(err: task::JoinError) -> DuoSyncError {
    if err.is_cancelled() {
        DuoSyncError::Internal("blocking history store task cancelled".into())
    } else {
        DuoSyncError::Internal(format!("blocking history store task failed: {err}"))
    }
}
