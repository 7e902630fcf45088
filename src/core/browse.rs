use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::ui::messages::info;
use crate::utils::formatting::pad_right;
use crate::utils::time::{format_duration, now};
use chrono::NaiveDateTime;

/// High-level business logic for "Browse entries".
pub struct BrowseLogic;

impl BrowseLogic {
    /// One fixed-width line per entry. Open entries count up to `at`.
    pub fn render_line(entry: &Entry, at: NaiveDateTime, name_width: usize) -> String {
        let elapsed = format_duration(entry.elapsed_at(at));
        format!(
            "{:<3} {:<3} {:<5} {} {:<11} {:<21} {:<14} {:<15}",
            "ID:",
            entry.id,
            "Name:",
            pad_right(&entry.name, name_width),
            "Start time:",
            entry.start_str(),
            "Elapsed time:",
            elapsed
        )
    }

    pub fn render_all(entries: &[Entry], at: NaiveDateTime, name_width: usize) -> Vec<String> {
        entries
            .iter()
            .map(|e| Self::render_line(e, at, name_width))
            .collect()
    }

    pub fn print_all(store: &EntryStore, name_width: usize) -> AppResult<()> {
        let entries = store.list_all()?;

        if entries.is_empty() {
            info("No entries yet.");
            return Ok(());
        }

        for line in Self::render_all(&entries, now(), name_width) {
            println!("{}", line);
        }
        Ok(())
    }
}
