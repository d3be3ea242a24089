//! Port interfaces for sync operations

use async_trait::async_trait;
use duosync_domain::{DatabaseEntry, History, RemoteSnapshot, Result};

/// Trait for fetching the user's remote activity
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Fetch validated summaries (newest first) and the current streak
    async fn fetch(&self) -> Result<RemoteSnapshot>;
}

/// Trait for loading and persisting the reconciled history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load the stored history, newest first. An absent store is empty.
    async fn load(&self) -> Result<History>;

    /// Persist `entries` (newest first)
    async fn save(&self, entries: &[DatabaseEntry]) -> Result<()>;
}
