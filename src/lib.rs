//! rTimeTracker library root.
//! Exposes the CLI parser, the interactive menu, the entry store and the
//! live timer, plus the high-level run() function used by main.rs.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use app::App;
use clap::Parser;
use cli::parser::Cli;
use cli::prompt::Prompt;
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Load the configuration, honouring `--config` and `--db`.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, apply overrides
    let cfg = load_config(&cli)?;

    // 3️⃣ open the store
    let mut app = App::open(cfg)?;

    // 4️⃣ interactive loop on stdin
    let stdin = std::io::stdin();
    let mut prompt = Prompt::new(stdin.lock());
    cli::menu::run(&mut app, &mut prompt)
}
