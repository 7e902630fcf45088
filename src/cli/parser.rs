use clap::Parser;

/// Command-line interface definition for rTimeTracker.
/// Everything else happens in the interactive menu.
#[derive(Parser, Debug)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple interactive time tracker: start/stop timers, add, browse and edit entries stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Read configuration from FILE instead of ~/.rtimetracker/rtimetracker.conf
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,
}
