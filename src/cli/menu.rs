use crate::app::App;
use crate::cli::commands;
use crate::cli::prompt::Prompt;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use std::io::BufRead;

/// The six fixed menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartTimer,
    StopTimer,
    AddEntry,
    BrowseEntries,
    EditEntry,
    Exit,
}

impl MenuChoice {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::StartTimer),
            "2" => Some(MenuChoice::StopTimer),
            "3" => Some(MenuChoice::AddEntry),
            "4" => Some(MenuChoice::BrowseEntries),
            "5" => Some(MenuChoice::EditEntry),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn print_menu() {
    println!();
    println!("1. Start timer");
    println!("2. Stop timer");
    println!("3. Add entry");
    println!("4. Browse entries");
    println!("5. Edit entry");
    println!("6. Exit");
    println!();
}

/// Run the interactive loop until "Exit" or end of input.
///
/// Input errors are reported and the loop continues; storage and I/O
/// failures are returned to the caller. A running timer is saved either way.
pub fn run<R: BufRead>(app: &mut App, prompt: &mut Prompt<R>) -> AppResult<()> {
    if let Err(e) = run_loop(app, prompt) {
        // best effort: the original failure is the one worth reporting
        let _ = shutdown(app);
        return Err(e);
    }
    shutdown(app)
}

fn run_loop<R: BufRead>(app: &mut App, prompt: &mut Prompt<R>) -> AppResult<()> {
    loop {
        print_menu();
        let raw = prompt.ask("Choose an option: ")?;

        if prompt.at_eof() && raw.trim().is_empty() {
            break;
        }

        let result = match MenuChoice::from_input(&raw) {
            Some(MenuChoice::StartTimer) => commands::start::handle(app, prompt),
            Some(MenuChoice::StopTimer) => commands::stop::handle(app),
            Some(MenuChoice::AddEntry) => commands::add::handle(app, prompt),
            Some(MenuChoice::BrowseEntries) => commands::browse::handle(app),
            Some(MenuChoice::EditEntry) => commands::edit::handle(app, prompt),
            Some(MenuChoice::Exit) => break,
            None => {
                println!("Invalid choice");
                Ok(())
            }
        };

        if let Err(e) = result {
            if e.is_recoverable() {
                error(&e);
            } else {
                return Err(e);
            }
        }

        if prompt.at_eof() {
            break;
        }
    }

    Ok(())
}

/// Close a timer left running at exit so the activity is not lost.
fn shutdown(app: &mut App) -> AppResult<()> {
    if let Some((id, stopped)) = app.finish_timer()? {
        println!("\r{}", stopped.summary());
        success(format!("Timer stopped on exit, entry #{} saved.", id));
    }
    Ok(())
}
