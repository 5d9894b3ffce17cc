//! Snapshot CRUD against progress_snapshots.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use scat_core::errors::ScatResult;

use crate::to_storage_err;

/// A stored row, payload included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub storage_key: String,
    pub payload: String,
    pub updated_at: String,
    pub write_count: i64,
}

pub fn get_payload(conn: &Connection, key: &str) -> ScatResult<Option<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT payload FROM progress_snapshots WHERE storage_key = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![key], |row| row.get(0))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn get_row(conn: &Connection, key: &str) -> ScatResult<Option<SnapshotRow>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT storage_key, payload, updated_at, write_count
             FROM progress_snapshots WHERE storage_key = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    stmt.query_row(params![key], |row| {
        Ok(SnapshotRow {
            storage_key: row.get(0)?,
            payload: row.get(1)?,
            updated_at: row.get(2)?,
            write_count: row.get(3)?,
        })
    })
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert or overwrite. Last writer wins.
pub fn upsert_payload(
    conn: &Connection,
    key: &str,
    payload: &str,
    now: DateTime<Utc>,
) -> ScatResult<()> {
    conn.execute(
        "INSERT INTO progress_snapshots (storage_key, payload, updated_at, write_count)
         VALUES (?1, ?2, ?3, 1)
         ON CONFLICT(storage_key) DO UPDATE SET
            payload = excluded.payload,
            updated_at = excluded.updated_at,
            write_count = progress_snapshots.write_count + 1",
        params![key, payload, now.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Returns whether a row was removed.
pub fn delete_payload(conn: &Connection, key: &str) -> ScatResult<bool> {
    let affected = conn
        .execute(
            "DELETE FROM progress_snapshots WHERE storage_key = ?1",
            params![key],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(affected > 0)
}

pub fn list_keys(conn: &Connection) -> ScatResult<Vec<String>> {
    let mut stmt = conn
        .prepare_cached("SELECT storage_key FROM progress_snapshots ORDER BY storage_key")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<String>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count_snapshots(conn: &Connection) -> ScatResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM progress_snapshots", [], |row| {
            row.get(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
