use crate::errors::AppError;
use crate::models::entry::{Entry, NewEntry};
use crate::utils::time::{DATETIME_FORMAT, format_datetime};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn parse_column(idx: usize, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let start_str: String = row.get("start_time")?;
    let end_str: Option<String> = row.get("end_time")?;

    let start_time = parse_column(2, &start_str)?;
    let end_time = match end_str.as_deref() {
        Some(s) if !s.is_empty() => Some(parse_column(3, s)?),
        _ => None,
    };

    Ok(Entry {
        id: row.get("id")?,
        name: row.get("name")?,
        start_time,
        end_time,
        notes: row.get("notes")?,
    })
}

/// Insert a new entry and return the id assigned by SQLite.
pub fn insert_entry(conn: &Connection, e: &NewEntry) -> Result<i64> {
    conn.execute(
        "INSERT INTO entries (name, start_time, end_time, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            e.name,
            format_datetime(&e.start_time),
            e.end_time.as_ref().map(format_datetime),
            e.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, start_time, end_time, notes FROM entries WHERE id = ?1",
    )?;
    stmt.query_row([id], map_row).optional()
}

/// All entries, most recent start first; equal starts → higher id first.
pub fn load_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, start_time, end_time, notes FROM entries
         ORDER BY start_time DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Distinct activity names, in order of first use.
pub fn load_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare_cached("SELECT name FROM entries GROUP BY name ORDER BY MIN(id) ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Overwrite every column (except id) with the values of `e`.
/// Returns the number of rows touched (0 when the id does not exist).
pub fn update_entry(conn: &Connection, e: &Entry) -> Result<usize> {
    conn.execute(
        "UPDATE entries
         SET name = ?1, start_time = ?2, end_time = ?3, notes = ?4
         WHERE id = ?5",
        params![
            e.name,
            format_datetime(&e.start_time),
            e.end_time.as_ref().map(format_datetime),
            e.notes,
            e.id,
        ],
    )
}
