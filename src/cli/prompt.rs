use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::prompt;
use std::io::BufRead;

/// Line-oriented reader for the interactive menu.
///
/// End of input is reported as an empty answer and remembered, so the menu
/// loop can terminate instead of spinning on a closed stdin.
pub struct Prompt<R: BufRead> {
    input: R,
    eof: bool,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self { input, eof: false }
    }

    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Print `question` and read one answer, without the line terminator.
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        prompt(question)?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            self.eof = true;
            // keep the next output on its own line
            println!();
            return Ok(String::new());
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Let the user pick an existing activity name or type a new one.
    pub fn get_name(&mut self, store: &EntryStore) -> AppResult<String> {
        let names = store.names()?;

        println!("Existing names:");
        for (i, name) in names.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
        println!("{}. Add new name", names.len() + 1);

        let choice = self.ask("Choose a name by number or add a new one: ")?;
        if let Some(name) = pick_name(&names, &choice) {
            return Ok(name.to_string());
        }

        let name = self.ask("Enter new name: ")?;
        if name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }
        Ok(name.trim().to_string())
    }
}

/// A 1-based index into `names`; anything else selects nothing.
pub fn pick_name<'a>(names: &'a [String], choice: &str) -> Option<&'a str> {
    let idx: usize = choice.trim().parse().ok()?;
    if idx >= 1 && idx <= names.len() {
        Some(names[idx - 1].as_str())
    } else {
        None
    }
}
