//! History persisted as one JSON array (newest first)

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use duosync_core::HistoryStore;
use duosync_domain::{DatabaseEntry, DuoSyncError, History, Result};
use tempfile::NamedTempFile;
use tokio::task;
use tracing::{debug, info};

use super::map_join_error;
use crate::errors::InfraError;

/// `HistoryStore` over a single JSON file.
///
/// A missing file reads as an empty history. Writes go to a temporary file in
/// the same directory which is then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for JsonHistoryStore {
    async fn load(&self) -> Result<History> {
        let path = self.path.clone();
        task::spawn_blocking(move || read_history(&path)).await.map_err(map_join_error)?
    }

    async fn save(&self, entries: &[DatabaseEntry]) -> Result<()> {
        let path = self.path.clone();
        let entries = entries.to_vec();
        task::spawn_blocking(move || write_history(&path, &entries)).await.map_err(map_join_error)?
    }
}

fn read_history(path: &Path) -> Result<History> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "history file absent; starting empty");
            return Ok(History::new());
        }
        Err(err) => return Err(InfraError::from(err).into()),
    };

    if contents.trim().is_empty() {
        return Ok(History::new());
    }

    serde_json::from_str(&contents).map_err(|err| {
        DuoSyncError::Storage(format!("{} is not a valid history file: {err}", path.display()))
    })
}

fn write_history(path: &Path, entries: &[DatabaseEntry]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(InfraError::from)?;

    let mut rendered = serde_json::to_vec_pretty(entries).map_err(InfraError::from)?;
    rendered.push(b'\n');

    let mut staging = NamedTempFile::new_in(&dir).map_err(InfraError::from)?;
    staging.write_all(&rendered).map_err(InfraError::from)?;
    staging.as_file().sync_all().map_err(InfraError::from)?;
    staging.persist(path).map_err(|err| InfraError::from(err.error))?;

    info!(path = %path.display(), entries = entries.len(), "history written");
    Ok(())
}
