use std::path::PathBuf;

/// Resolved file locations for day-planner.
/// Pure data structure with no I/O.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Log file written by the tracing subscriber
    /// Example: ~/.local/state/day-planner/planner.log
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolves paths from the process environment.
    ///
    /// # Environment
    ///
    /// * `XDG_STATE_HOME` - Base for the log directory when set and non-empty.
    /// * `HOME` - Fallback base (`~/.local/state`). Defaults to "/tmp" if unset.
    pub fn resolve() -> Self {
        Self::resolve_with(
            std::env::var("XDG_STATE_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }

    /// Same as [`resolve`](Self::resolve) with the environment passed in.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use day_planner_tui::paths::Paths;
    ///
    /// let paths = Paths::resolve_with(None, Some("/home/user".into()));
    /// assert_eq!(
    ///     paths.log_file,
    ///     Path::new("/home/user/.local/state/day-planner/planner.log")
    /// );
    /// ```
    pub fn resolve_with(xdg_state_home: Option<String>, home: Option<String>) -> Self {
        let state_dir = match xdg_state_home.filter(|s| !s.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(home.unwrap_or_else(|| "/tmp".to_string()))
                .join(".local")
                .join("state"),
        };

        Self {
            log_file: state_dir.join("day-planner").join("planner.log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_resolve_prefers_xdg_state_home() {
        let paths = Paths::resolve_with(Some("/xdg/state".into()), Some("/home/u".into()));
        assert_eq!(paths.log_file, Path::new("/xdg/state/day-planner/planner.log"));
    }

    #[test]
    fn test_resolve_ignores_empty_xdg_state_home() {
        let paths = Paths::resolve_with(Some(String::new()), Some("/home/u".into()));
        assert_eq!(
            paths.log_file,
            Path::new("/home/u/.local/state/day-planner/planner.log")
        );
    }

    #[test]
    fn test_resolve_without_home_falls_back_to_tmp() {
        let paths = Paths::resolve_with(None, None);
        assert_eq!(
            paths.log_file,
            Path::new("/tmp/.local/state/day-planner/planner.log")
        );
    }

    #[test]
    fn test_resolve_from_env_is_absolute_file() {
        let paths = Paths::resolve();
        assert!(paths.log_file.ends_with("day-planner/planner.log"));
    }
}
