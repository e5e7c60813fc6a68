use crate::errors::{AppError, AppResult};
use crate::models::{OvertimeRecord, RecordDraft};
use crate::utils::time::{format_store, parse_store};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<OvertimeRecord> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let start = parse_store(&start_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(start_str.clone())),
        )
    })?;

    let end = parse_store(&end_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(end_str.clone())),
        )
    })?;

    Ok(OvertimeRecord {
        id: row.get("id")?,
        technician: row.get("technician")?,
        start,
        end,
        description: row.get("work_description")?,
    })
}

/// Records for one technician, most recent start first (display order).
pub fn list_by_technician(conn: &Connection, technician: &str) -> AppResult<Vec<OvertimeRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM overtime_records
         WHERE technician = ?1
         ORDER BY start_time DESC, id DESC",
    )?;

    let rows = stmt.query_map([technician], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every record in insertion order, for export.
pub fn list_all(conn: &Connection) -> AppResult<Vec<OvertimeRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM overtime_records ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Inserts a validated draft and returns the id assigned by SQLite.
pub fn insert_record(conn: &Connection, draft: &RecordDraft) -> AppResult<i64> {
    let (start, end) = draft_times(draft)?;
    conn.execute(
        "INSERT INTO overtime_records (technician, start_time, end_time, work_description)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            draft.technician,
            format_store(start),
            format_store(end),
            draft.description,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-field overwrite of one record.
pub fn update_record(conn: &Connection, id: i64, draft: &RecordDraft) -> AppResult<()> {
    let (start, end) = draft_times(draft)?;
    let changed = conn.execute(
        "UPDATE overtime_records
         SET technician = ?1, start_time = ?2, end_time = ?3, work_description = ?4
         WHERE id = ?5",
        params![
            draft.technician,
            format_store(start),
            format_store(end),
            draft.description,
            id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::RecordNotFound(id));
    }
    Ok(())
}

pub fn delete_record(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM overtime_records WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::RecordNotFound(id));
    }
    Ok(())
}

pub fn delete_all_records(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM overtime_records", [])?;
    Ok(())
}

fn draft_times(
    draft: &RecordDraft,
) -> AppResult<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
    // The controller validates before persisting; this is the last line
    // of defense against a caller bypassing it.
    match (draft.start, draft.end) {
        (Some(s), Some(e)) => Ok((s, e)),
        _ => Err(AppError::Other(
            "draft reached the store without both timestamps".to_string(),
        )),
    }
}
