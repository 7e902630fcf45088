use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryUpdate};
use crate::ui::messages::{info, success};
use crate::utils::time::{parse_minutes, parse_optional_datetime};
use chrono::{Duration, NaiveDateTime};

/// Raw answers collected by the edit prompts. Blank = unchanged.
#[derive(Debug, Default, Clone)]
pub struct EditAnswers {
    pub name: String,
    pub start_time: String,
    pub minutes: String,
    pub notes: String,
}

/// High-level business logic for "Edit entry".
pub struct EditLogic;

impl EditLogic {
    /// Decide the new end time.
    ///
    /// A duration with no new start is applied from the *stored* start.
    /// A duration together with a new start does not touch the end time.
    pub fn resolve_end(
        existing_start: NaiveDateTime,
        new_start: Option<NaiveDateTime>,
        duration: Option<Duration>,
    ) -> Option<NaiveDateTime> {
        match (new_start, duration) {
            (None, Some(d)) => Some(existing_start + d),
            _ => None,
        }
    }

    /// Turn the raw answers into an [`EntryUpdate`] for `entry`.
    /// Nothing is written if any answer fails to parse.
    pub fn build_update(entry: &Entry, answers: &EditAnswers) -> AppResult<EntryUpdate> {
        let new_start = parse_optional_datetime(&answers.start_time)?;
        let duration = parse_minutes(&answers.minutes)?;

        Ok(EntryUpdate {
            name: Some(answers.name.clone()),
            start_time: new_start,
            end_time: Self::resolve_end(entry.start_time, new_start, duration),
            notes: Some(answers.notes.clone()),
        })
    }

    pub fn apply(store: &EntryStore, id: i64, answers: &EditAnswers) -> AppResult<Entry> {
        let entry = store.get(id)?.ok_or(AppError::NotFound(id))?;
        let changes = Self::build_update(&entry, answers)?;

        if changes.is_empty() {
            info(format!("Entry #{} left unchanged.", id));
            return Ok(entry);
        }

        let updated = store.update(id, &changes)?;
        success(format!("Entry #{} updated.", id));
        Ok(updated)
    }
}
