use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_datetime, parse_datetime, parse_minutes};

/// High-level business logic for "Add entry".
pub struct AddLogic;

impl AddLogic {
    /// Parse the raw answers and store the entry.
    ///
    /// - `start_raw`: `YYYY-MM-DD HH:MM:SS`
    /// - `minutes_raw`: whole minutes; blank leaves the entry open-ended
    pub fn apply(
        store: &EntryStore,
        name: &str,
        start_raw: &str,
        minutes_raw: &str,
    ) -> AppResult<i64> {
        let start = parse_datetime(start_raw)?;
        let end = parse_minutes(minutes_raw)?.map(|d| start + d);

        let id = store.add(name, start, end, None)?;

        match end {
            Some(end) => success(format!(
                "Entry #{} '{}' added: {} → {}",
                id,
                name.trim(),
                format_datetime(&start),
                format_datetime(&end)
            )),
            None => success(format!(
                "Entry #{} '{}' added: {} (open-ended)",
                id,
                name.trim(),
                format_datetime(&start)
            )),
        }

        Ok(id)
    }
}
