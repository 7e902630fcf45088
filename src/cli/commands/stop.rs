use crate::app::App;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle "Stop timer"
pub fn handle(app: &mut App) -> AppResult<()> {
    match app.finish_timer()? {
        Some((id, stopped)) => {
            println!("\r{}", stopped.summary());
            success(format!("Entry #{} saved.", id));
        }
        None => warning("No timer is currently running."),
    }
    Ok(())
}
