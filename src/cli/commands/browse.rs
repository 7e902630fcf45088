use crate::app::App;
use crate::core::browse::BrowseLogic;
use crate::errors::AppResult;

/// Handle "Browse entries"
pub fn handle(app: &App) -> AppResult<()> {
    BrowseLogic::print_all(&app.store, app.cfg.name_width)
}
