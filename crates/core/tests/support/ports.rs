use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use duosync_core::{HistoryStore, SummarySource};
use duosync_domain::{
    DatabaseEntry, DuoSyncError, History, RemoteSnapshot, Result as DomainResult,
};

/// In-memory mock for `SummarySource`.
///
/// Returns the same snapshot on every fetch, or the configured error.
#[derive(Clone)]
pub struct MockSummarySource {
    snapshot: RemoteSnapshot,
    failure: Option<DuoSyncError>,
}

impl MockSummarySource {
    pub fn new(snapshot: RemoteSnapshot) -> Self {
        Self { snapshot, failure: None }
    }

    pub fn failing(error: DuoSyncError) -> Self {
        Self {
            snapshot: RemoteSnapshot { summaries: Vec::new(), streak: Default::default() },
            failure: Some(error),
        }
    }
}

#[async_trait]
impl SummarySource for MockSummarySource {
    async fn fetch(&self) -> DomainResult<RemoteSnapshot> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.snapshot.clone()),
        }
    }
}

/// In-memory mock for `HistoryStore`.
///
/// Records every save so tests can assert on write-back behaviour.
#[derive(Default, Clone)]
pub struct MockHistoryStore {
    entries: Arc<Mutex<History>>,
    saves: Arc<Mutex<usize>>,
}

impl MockHistoryStore {
    /// Create a new mock seeded with the provided history (newest first).
    pub fn new(entries: History) -> Self {
        Self { entries: Arc::new(Mutex::new(entries)), saves: Arc::default() }
    }

    pub fn snapshot(&self) -> History {
        self.entries.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn load(&self) -> DomainResult<History> {
        Ok(self.snapshot())
    }

    async fn save(&self, entries: &[DatabaseEntry]) -> DomainResult<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
