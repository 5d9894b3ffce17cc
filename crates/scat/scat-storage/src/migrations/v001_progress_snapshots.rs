//! v001: progress_snapshots.

use rusqlite::Connection;

use scat_core::errors::ScatResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ScatResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS progress_snapshots (
            storage_key     TEXT PRIMARY KEY,
            payload         TEXT NOT NULL,
            updated_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
