//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use scat_core::errors::ScatResult;

use crate::to_storage_err;

/// File-backed connections: WAL, NORMAL sync, 5s busy_timeout.
pub fn apply_pragmas(conn: &Connection) -> ScatResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> ScatResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
