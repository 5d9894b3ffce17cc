//! SqliteProgressStore: a single mutex-guarded connection with pragmas and
//! migrations applied on open.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::Connection;
use tracing::info;

use scat_core::errors::{ScatResult, StorageError};
use scat_core::IProgressStore;

use crate::queries::snapshot_ops::{self, SnapshotRow};
use crate::{migrations, pragmas, to_storage_err};

/// Durable progress store backed by one SQLite database.
pub struct SqliteProgressStore {
    conn: Mutex<Connection>,
}

impl SqliteProgressStore {
    /// Open (or create) a file-backed store.
    pub fn open(path: &Path) -> ScatResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        pragmas::apply_pragmas(&conn)?;
        let version = migrations::run_migrations(&conn)?;
        info!(path = %path.display(), schema_version = version, "progress store opened");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory database, for tests and ephemeral sessions.
    pub fn open_in_memory() -> ScatResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn with_conn<F, T>(&self, f: F) -> ScatResult<T>
    where
        F: FnOnce(&Connection) -> ScatResult<T>,
    {
        let conn = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&conn)
    }

    pub fn schema_version(&self) -> ScatResult<u32> {
        self.with_conn(migrations::current_version)
    }

    pub fn row(&self, key: &str) -> ScatResult<Option<SnapshotRow>> {
        self.with_conn(|conn| snapshot_ops::get_row(conn, key))
    }

    pub fn keys(&self) -> ScatResult<Vec<String>> {
        self.with_conn(snapshot_ops::list_keys)
    }

    pub fn count(&self) -> ScatResult<usize> {
        self.with_conn(snapshot_ops::count_snapshots)
    }
}

impl IProgressStore for SqliteProgressStore {
    fn get(&self, key: &str) -> ScatResult<Option<String>> {
        self.with_conn(|conn| snapshot_ops::get_payload(conn, key))
    }

    fn put(&self, key: &str, payload: &str) -> ScatResult<()> {
        self.with_conn(|conn| snapshot_ops::upsert_payload(conn, key, payload, Utc::now()))
    }

    fn remove(&self, key: &str) -> ScatResult<()> {
        self.with_conn(|conn| snapshot_ops::delete_payload(conn, key).map(|_| ()))
    }
}
