//! Error types for day-planner-tui
//!
//! The planner store itself never fails; these cover the ambient plumbing
//! around it (log file setup, state snapshots).

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },
    #[error("subscriber: {0}")]
    Subscriber(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
