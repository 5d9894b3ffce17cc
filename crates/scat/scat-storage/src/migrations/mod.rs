//! Schema migrations tracked through `PRAGMA user_version`.

pub mod v001_progress_snapshots;
pub mod v002_snapshot_metadata;

use rusqlite::Connection;

use scat_core::errors::{ScatResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> ScatResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_progress_snapshots::migrate),
    (2, v002_snapshot_metadata::migrate),
];

/// Latest schema version.
pub const LATEST_VERSION: u32 = 2;

pub fn current_version(conn: &Connection) -> ScatResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> ScatResult<u32> {
    apply_migrations(conn, MIGRATIONS)
}

/// Each step and its `user_version` bump commit together, so a failed step
/// leaves neither partial schema nor a bumped version behind.
pub(crate) fn apply_migrations(conn: &Connection, migrations: &[(u32, Migration)]) -> ScatResult<u32> {
    let current = current_version(conn)?;
    for &(version, migrate) in migrations.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| to_storage_err(e.to_string()))?;
        migrate(&tx).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        tx.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "progress store migration applied");
    }
    current_version(conn)
}
