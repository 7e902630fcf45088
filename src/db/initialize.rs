use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Safe to call on every start: all statements are `IF NOT EXISTS`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            start_time  TEXT NOT NULL,          -- YYYY-MM-DD HH:MM:SS
            end_time    TEXT,                   -- NULL while the activity is open
            notes       TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entries_start_time ON entries(start_time);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
