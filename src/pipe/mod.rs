//! Passing search output through an external command.
//!
//! Typically used to colorize results, e.g.
//! `bat --language yaml --style plain --color always`.

mod shell;

pub use shell::{run_piped, ShellError};

use std::time::Duration;

/// Default time a pass-output command may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A shell command that receives the YAML output on stdin and whose stdout
/// replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    command: String,
    timeout: Duration,
}

impl PassOutput {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Runs the command over `input` and returns what it printed.
    pub fn pipe(&self, input: &str) -> Result<String, ShellError> {
        run_piped(&self.command, input, Some(self.timeout))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_pass_output_captures_stdout() {
        let pipe = PassOutput::new("tr a-z A-Z");
        assert_eq!(pipe.pipe(".image: nginx\n").unwrap(), ".IMAGE: NGINX\n");
    }

    #[test]
    fn test_pass_output_respects_timeout() {
        let pipe = PassOutput::new("sleep 2").with_timeout(Duration::from_millis(200));
        assert!(matches!(pipe.pipe(""), Err(ShellError::Timeout(_, _))));
    }
}
