/// Error types for the sanity checker
///
/// Only `UnreadableFile` can occur while checking files. The remaining variants
/// guard construction of rule sets and quote pools.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SanityError {
    /// The file could not be read as text (missing, permission denied, not UTF-8)
    #[error("{}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule pattern failed to compile
    #[error("Error compiling pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule set must contain at least one rule")]
    EmptyRuleSet,

    #[error("Quote pool must contain at least one quote")]
    EmptyQuotePool,
}

impl SanityError {
    /// Whether this error describes a file that could not be read
    pub fn is_unreadable(&self) -> bool {
        matches!(self, SanityError::UnreadableFile { .. })
    }
}
