//! Error types for kubectl-grep.
//!
//! Every variant is a final outcome of one invocation; the binary prints the
//! message (followed by its source chain) and exits with status 1.

use crate::pipe::ShellError;
use thiserror::Error;

/// Errors that can end a search run.
#[derive(Debug, Error)]
pub enum GrepError {
    /// The input is not valid YAML. The raw input is echoed for diagnosis.
    #[error("Could not parse yaml:\n{input}")]
    Decode {
        input: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A mapping key is a sequence or mapping and has no path spelling.
    #[error("Could not parse yaml: unsupported {kind} used as a mapping key")]
    UnsupportedKey { kind: &'static str },

    #[error("Unexpected empty search string")]
    EmptySearchTerm,

    /// The document was valid but no key matched.
    #[error("Nothing found")]
    NoMatches,

    #[error("Could not stringify yaml")]
    Encode(#[source] serde_yaml::Error),

    #[error("Could not pass output")]
    Pipe(#[from] ShellError),

    #[error("Could not read input")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, GrepError>;
