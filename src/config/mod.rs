//! Configuration system for kubectl-grep.
//!
//! Defaults for the search flags can be kept in
//! `~/.config/kubectl-grep/config.toml`, so options you always want (say,
//! case-insensitive matching or a colorizing pass-output command) don't need
//! repeating. Command-line flags and their environment variables are merged
//! on top.
//!
//! # Example
//!
//! ```
//! use kubectl_grep::config::Config;
//!
//! let config: Config = toml::from_str("ignore_case = true").unwrap();
//! assert!(config.ignore_case);
//! assert!(!config.exact);
//! assert_eq!(config.pipe_timeout_secs, 30);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for kubectl-grep.
///
/// # Fields
///
/// * `ignore_case` - Case-insensitive substring matching (default: false)
/// * `exact` - Only exact key matches (default: false)
/// * `show_status` - Also search `status` fields (default: false)
/// * `pass_output` - Shell command to pass output through (default: none)
/// * `pipe_timeout_secs` - Seconds the pass-output command may run (default: 30)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ignore_case: bool,

    #[serde(default)]
    pub exact: bool,

    #[serde(default)]
    pub show_status: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_output: Option<String>,

    #[serde(default = "default_pipe_timeout_secs")]
    pub pipe_timeout_secs: u64,
}

fn default_pipe_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_case: false,
            exact: false,
            show_status: false,
            pass_output: None,
            pipe_timeout_secs: default_pipe_timeout_secs(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/kubectl-grep/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("kubectl-grep");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read config file");
                Self::default()
            }
        }
    }

    pub fn pipe_timeout(&self) -> Duration {
        Duration::from_secs(self.pipe_timeout_secs)
    }
}
