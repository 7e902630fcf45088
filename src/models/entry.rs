use crate::utils::time::format_datetime;
use chrono::{Duration, NaiveDateTime};

/// One recorded activity. Mirrors a row of the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,                         // ⇔ entries.id (assigned on insert)
    pub name: String,                    // ⇔ entries.name
    pub start_time: NaiveDateTime,       // ⇔ entries.start_time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end_time: Option<NaiveDateTime>, // ⇔ entries.end_time (NULL = still open)
    pub notes: Option<String>,           // ⇔ entries.notes
}

impl Entry {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed time up to `end_time`, or up to `at` for an open entry.
    pub fn elapsed_at(&self, at: NaiveDateTime) -> Duration {
        self.end_time.unwrap_or(at) - self.start_time
    }

    pub fn start_str(&self) -> String {
        format_datetime(&self.start_time)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end_time.as_ref().map(format_datetime)
    }
}

/// Data for an entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl NewEntry {
    pub fn new(name: impl Into<String>, start_time: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time: None,
            notes: None,
        }
    }

    pub fn ending_at(mut self, end_time: Option<NaiveDateTime>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// Partial update of an entry. `None` and blank strings both mean
/// "leave the stored value as it is"; there is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub name: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        non_blank(&self.name).is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && non_blank(&self.notes).is_none()
    }

    /// Apply the provided fields on top of `entry`.
    pub fn apply_to(&self, entry: &Entry) -> Entry {
        let mut out = entry.clone();
        if let Some(name) = non_blank(&self.name) {
            out.name = name.to_string();
        }
        if let Some(start) = self.start_time {
            out.start_time = start;
        }
        if let Some(end) = self.end_time {
            out.end_time = Some(end);
        }
        if let Some(notes) = non_blank(&self.notes) {
            out.notes = Some(notes.to_string());
        }
        out
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
