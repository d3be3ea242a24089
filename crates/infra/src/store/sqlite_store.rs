//! SQLite-backed implementation of the `HistoryStore` port.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use duosync_core::HistoryStore;
use duosync_domain::{
    DatabaseEntry, Experience, History, Progression, Result, SessionInformation,
    StreakInformation,
};
use rusqlite::{params, Row};
use tokio::task;
use tracing::info;

use super::manager::DbManager;
use super::map_join_error;
use crate::errors::InfraError;

const DEFAULT_POOL_SIZE: u32 = 2;

const SELECT_ALL_SQL: &str = "SELECT date, xp_goal, xp_today, number_of_sessions, session_time, site_streak, time
     FROM history_entries
     ORDER BY date DESC";

const UPSERT_SQL: &str = "INSERT INTO history_entries
        (date, xp_goal, xp_today, number_of_sessions, session_time, site_streak, time)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
     ON CONFLICT(date) DO UPDATE SET
        xp_goal = excluded.xp_goal,
        xp_today = excluded.xp_today,
        number_of_sessions = excluded.number_of_sessions,
        session_time = excluded.session_time,
        site_streak = excluded.site_streak,
        time = excluded.time";

/// One row per day, keyed by date. Saving upserts; rows are never deleted.
pub struct SqliteHistoryStore {
    db: Arc<DbManager>,
}

impl SqliteHistoryStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Open the database at `path` and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = DbManager::new(path, DEFAULT_POOL_SIZE)?;
        db.run_migrations()?;
        Ok(Self::new(Arc::new(db)))
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn load(&self) -> Result<History> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<History> {
            let conn = db.get_connection()?;
            let mut stmt = conn.prepare(SELECT_ALL_SQL).map_err(InfraError::from)?;
            let rows = stmt.query_map([], map_entry_row).map_err(InfraError::from)?;
            let history = rows.collect::<rusqlite::Result<History>>().map_err(InfraError::from)?;
            Ok(history)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn save(&self, entries: &[DatabaseEntry]) -> Result<()> {
        let db = Arc::clone(&self.db);
        let entries = entries.to_vec();

        task::spawn_blocking(move || -> Result<()> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(InfraError::from)?;
            {
                let mut stmt = tx.prepare_cached(UPSERT_SQL).map_err(InfraError::from)?;
                for entry in &entries {
                    stmt.execute(params![
                        entry.date,
                        entry.progression.experience.xp_goal,
                        entry.progression.experience.xp_today,
                        entry.progression.session_information.number_of_sessions,
                        entry.progression.session_information.session_time,
                        entry.streak_information.site_streak,
                        entry.time,
                    ])
                    .map_err(InfraError::from)?;
                }
            }
            tx.commit().map_err(InfraError::from)?;

            info!(db_path = %db.path().display(), entries = entries.len(), "history upserted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<DatabaseEntry> {
    Ok(DatabaseEntry {
        date: row.get("date")?,
        progression: Progression {
            experience: Experience { xp_goal: row.get("xp_goal")?, xp_today: row.get("xp_today")? },
            session_information: SessionInformation {
                number_of_sessions: row.get("number_of_sessions")?,
                session_time: row.get("session_time")?,
            },
        },
        streak_information: StreakInformation { site_streak: row.get("site_streak")? },
        time: row.get("time")?,
    })
}
