//! SQLite connection manager backed by an r2d2 pool.

use std::path::{Path, PathBuf};

use duosync_domain::{DuoSyncError, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection};
use tracing::info;

use crate::errors::InfraError;

pub const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");
const BUSY_TIMEOUT_MS: u32 = 5_000;

pub type SqliteConnection = PooledConnection<SqliteConnectionManager>;

/// Database manager that wraps an r2d2 SQLite pool.
pub struct DbManager {
    pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
}

impl DbManager {
    /// Open (creating if needed) the database at `db_path`.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let manager = SqliteConnectionManager::file(&path).with_init(|conn| {
            conn.execute_batch(&format!(
                "PRAGMA journal_mode = WAL; PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"
            ))
        });
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager).map_err(InfraError::from)?;

        info!(db_path = %path.display(), max_connections = pool.max_size(), "sqlite pool initialised");

        Ok(Self { pool, path })
    }

    pub fn get_connection(&self) -> Result<SqliteConnection> {
        Ok(self.pool.get().map_err(InfraError::from)?)
    }

    /// Ensure the full schema exists and record [`SCHEMA_VERSION`].
    ///
    /// A database stamped with a newer version than this build knows is
    /// refused rather than written to.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(SCHEMA_SQL).map_err(InfraError::from)?;

        match applied_version(&conn)? {
            Some(version) if version > SCHEMA_VERSION => {
                return Err(DuoSyncError::Storage(format!(
                    "{} has schema version {version}, newer than supported {SCHEMA_VERSION}",
                    self.path.display()
                )));
            }
            Some(SCHEMA_VERSION) => return Ok(()),
            previous => {
                conn.execute(
                    "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, CAST(strftime('%s','now') AS INTEGER))",
                    params![SCHEMA_VERSION],
                )
                .map_err(InfraError::from)?;
                info!(from = ?previous, to = SCHEMA_VERSION, "schema version recorded");
            }
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Highest recorded schema version; errors if the table does not exist.
fn applied_version(conn: &Connection) -> Result<Option<i32>> {
    let version = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .map_err(InfraError::from)?;
    Ok(version)
}
