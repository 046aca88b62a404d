use std::path::PathBuf;

use clap::Parser;

use crate::paths::Paths;

/// Single-day planner for the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "day-planner", version)]
pub struct Cli {
    /// Write logs here instead of the default state directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter (EnvFilter syntax); PLANNER_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Redraw interval in milliseconds (also the cursor blink rate)
    #[arg(long, value_name = "MS", default_value_t = 250, value_parser = clap::value_parser!(u64).range(10..))]
    pub tick_ms: u64,

    /// Start with no rows instead of the demo day
    #[arg(long)]
    pub empty: bool,

    /// Print the final planner state as JSON after exiting
    #[arg(long)]
    pub dump_on_exit: bool,
}

impl Cli {
    /// Log destination, or `None` when logging is off.
    pub fn log_path(&self, paths: &Paths) -> Option<PathBuf> {
        if self.no_log {
            return None;
        }
        Some(self.log_file.clone().unwrap_or_else(|| paths.log_file.clone()))
    }
}
