use crate::app::App;
use crate::cli::prompt::Prompt;
use crate::core::timer::TimerSession;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::time::{format_datetime, now};
use std::io::BufRead;

/// Handle "Start timer"
pub fn handle<R: BufRead>(app: &mut App, prompt: &mut Prompt<R>) -> AppResult<()> {
    if let Some(running) = &app.timer {
        warning(format!(
            "A timer is already running for '{}'. Stop it first.",
            running.name()
        ));
        return Ok(());
    }

    let name = prompt.get_name(&app.store)?;
    let session = TimerSession::start(&name, now(), app.tick());

    info(format!(
        "Timer started for '{}' at {}",
        session.name(),
        format_datetime(&session.start_time())
    ));
    app.timer = Some(session);

    Ok(())
}
