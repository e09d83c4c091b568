//! Errors raised while loading or snapshotting a word list. The trie operations
//! themselves are total and never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read word list: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not have the column the [`FileFormat`](crate::FileFormat) asks for.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("invalid trie snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
