//! Database schema initialization.
//! All schema changes go through the versioned migration list below,
//! keyed on `PRAGMA user_version`, so an old database upgrades in place.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const MIGRATIONS: &[&str] = &[
    // v1: base table
    "CREATE TABLE IF NOT EXISTS overtime_records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        technician TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        work_description TEXT NOT NULL DEFAULT ''
     );",
    // v2: listing is always per technician, most recent first
    "CREATE INDEX IF NOT EXISTS idx_records_technician_start
        ON overtime_records (technician, start_time DESC);",
];

pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    for (i, sql) in MIGRATIONS.iter().enumerate() {
        let version = (i + 1) as i64;
        if version <= current {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("migration {version} failed: {e}")))?;
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}
