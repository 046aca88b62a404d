//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so logs never go to stdout/stderr.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Env var that overrides `--log-level`.
pub const LOG_ENV: &str = "PLANNER_LOG";

/// Opens (appending) the log file, creating its directory first.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.display().to_string(),
            source,
        })
}

/// `PLANNER_LOG` when set, otherwise `default_directive`.
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, LoggingError> {
    match std::env::var(LOG_ENV) {
        Ok(from_env) if !from_env.trim().is_empty() => parse_filter(&from_env),
        _ => parse_filter(default_directive),
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::Filter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber writing to `path`.
pub fn init(path: &Path, default_directive: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_directive)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("planner.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn open_log_file_reports_directory_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let err = open_log_file(&blocker.join("planner.log")).unwrap_err();
        assert!(matches!(err, LoggingError::CreateDir { .. }));
    }

    #[test]
    fn parse_filter_accepts_levels_and_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("day_planner_tui=trace,warn").is_ok());
    }

    #[test]
    fn parse_filter_rejects_garbage() {
        let err = parse_filter("day_planner_tui=notalevel").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }
}
