//! v002: write counter per key, index on updated_at for stale-snapshot sweeps.

use rusqlite::Connection;

use scat_core::errors::ScatResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> ScatResult<()> {
    conn.execute_batch(
        "
        ALTER TABLE progress_snapshots ADD COLUMN write_count INTEGER NOT NULL DEFAULT 1;
        CREATE INDEX IF NOT EXISTS idx_progress_snapshots_updated
            ON progress_snapshots(updated_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
