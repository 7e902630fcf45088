use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_entries, load_entry, load_names, update_entry};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryUpdate, NewEntry};
use crate::ui::messages::warning;
use crate::utils::time::{format_datetime, truncate_seconds};
use chrono::NaiveDateTime;
use std::path::Path;

/// Durable table of time entries.
///
/// All timestamps are truncated to whole seconds before they are written.
/// Entries are never deleted.
pub struct EntryStore {
    pool: DbPool,
    audit_enabled: bool,
}

fn check_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> AppResult<()> {
    match end {
        Some(end) if end < start => Err(AppError::InvalidRange {
            start: format_datetime(&start),
            end: format_datetime(&end),
        }),
        _ => Ok(()),
    }
}

impl EntryStore {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            audit_enabled: true,
        })
    }

    /// Enable or disable the audit rows written into the `log` table.
    pub fn with_audit(mut self, audit: bool) -> Self {
        self.audit_enabled = audit;
        self
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Insert a new entry and return its id.
    pub fn add(
        &self,
        name: &str,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        notes: Option<&str>,
    ) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let start_time = truncate_seconds(start_time);
        let end_time = end_time.map(truncate_seconds);
        check_range(start_time, end_time)?;

        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let entry = NewEntry::new(name, start_time)
            .ending_at(end_time)
            .with_notes(notes);

        let id = insert_entry(&self.pool.conn, &entry)?;

        let span = match &entry.end_time {
            Some(end) => format!("{} → {}", format_datetime(&start_time), format_datetime(end)),
            None => format!("{} → (open)", format_datetime(&start_time)),
        };
        self.record("add", id, &format!("Added '{}' {}", entry.name, span));

        Ok(id)
    }

    /// Convenience wrapper around [`EntryStore::add`] for a prepared entry.
    pub fn add_entry(&self, entry: &NewEntry) -> AppResult<i64> {
        self.add(
            &entry.name,
            entry.start_time,
            entry.end_time,
            entry.notes.as_deref(),
        )
    }

    /// Look an entry up by id. Absence is not an error.
    pub fn get(&self, id: i64) -> AppResult<Option<Entry>> {
        Ok(load_entry(&self.pool.conn, id)?)
    }

    /// Every entry, ordered by start time descending (ties: newest id first).
    pub fn list_all(&self) -> AppResult<Vec<Entry>> {
        Ok(load_entries(&self.pool.conn)?)
    }

    /// Distinct names already used, in order of first use.
    pub fn names(&self) -> AppResult<Vec<String>> {
        Ok(load_names(&self.pool.conn)?)
    }

    /// Overwrite only the fields that are provided and non-blank.
    /// Returns the entry as stored after the update.
    pub fn update(&self, id: i64, changes: &EntryUpdate) -> AppResult<Entry> {
        let current = self.get(id)?.ok_or(AppError::NotFound(id))?;

        if changes.is_empty() {
            return Ok(current);
        }

        let mut updated = changes.apply_to(&current);
        updated.name = updated.name.trim().to_string();
        updated.start_time = truncate_seconds(updated.start_time);
        updated.end_time = updated.end_time.map(truncate_seconds);
        check_range(updated.start_time, updated.end_time)?;

        if update_entry(&self.pool.conn, &updated)? == 0 {
            return Err(AppError::NotFound(id));
        }

        self.record("edit", id, &describe_changes(&current, &updated));

        Ok(updated)
    }

    fn record(&self, operation: &str, id: i64, message: &str) {
        if !self.audit_enabled {
            return;
        }
        if let Err(e) = ttlog(&self.pool.conn, operation, &format!("id={}", id), message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

fn describe_changes(before: &Entry, after: &Entry) -> String {
    let mut parts = Vec::new();
    if before.name != after.name {
        parts.push(format!("name '{}' → '{}'", before.name, after.name));
    }
    if before.start_time != after.start_time {
        parts.push(format!("start {} → {}", before.start_str(), after.start_str()));
    }
    if before.end_time != after.end_time {
        parts.push(format!(
            "end {} → {}",
            before.end_str().unwrap_or_else(|| "(open)".into()),
            after.end_str().unwrap_or_else(|| "(open)".into())
        ));
    }
    if before.notes != after.notes {
        parts.push("notes updated".to_string());
    }

    if parts.is_empty() {
        "No changes".to_string()
    } else {
        parts.join(", ")
    }
}
