use crate::app::App;
use crate::cli::prompt::Prompt;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use std::io::BufRead;

/// Handle "Add entry"
pub fn handle<R: BufRead>(app: &mut App, prompt: &mut Prompt<R>) -> AppResult<()> {
    let name = prompt.get_name(&app.store)?;
    let start = prompt.ask("Enter start time (YYYY-MM-DD HH:MM:SS): ")?;
    let minutes = prompt.ask("Enter duration in minutes: ")?;

    AddLogic::apply(&app.store, &name, &start, &minutes)?;
    Ok(())
}
