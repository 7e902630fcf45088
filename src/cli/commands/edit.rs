use crate::app::App;
use crate::cli::prompt::Prompt;
use crate::core::edit::{EditAnswers, EditLogic};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::BufRead;

/// Handle "Edit entry"
pub fn handle<R: BufRead>(app: &mut App, prompt: &mut Prompt<R>) -> AppResult<()> {
    let raw_id = prompt.ask("Enter entry id: ")?;

    //
    // 1. Resolve the entry; unknown ids abort without side effects
    //
    let entry = match raw_id.trim().parse::<i64>() {
        Ok(id) => app.store.get(id)?,
        Err(_) => None,
    };
    let Some(entry) = entry else {
        warning(format!("No entry found with id {}", raw_id.trim()));
        return Ok(());
    };

    //
    // 2. Collect the new values (blank = unchanged)
    //
    let answers = EditAnswers {
        name: prompt.ask("Enter new name: ")?,
        start_time: prompt.ask("Enter new start time: ")?,
        minutes: prompt.ask("Enter new elapsed time: ")?,
        notes: prompt.ask("Enter new notes: ")?,
    };

    //
    // 3. Apply
    //
    EditLogic::apply(&app.store, entry.id, &answers)?;
    Ok(())
}
