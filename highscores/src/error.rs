//! Error types for decoding and editing highscore files.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::session::Phase;

/// Record field being read when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Owner,
    Score,
    Timestamp,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Owner => "owner",
            Field::Score => "score",
            Field::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a byte source is not a valid highscores file.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("File header is truncated")]
    TruncatedHeader,

    #[error("Unsupported highscores version: {0}")]
    UnsupportedVersion(u32),

    #[error("Record {index} is truncated in field '{field}'")]
    TruncatedField { field: Field, index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Error returned by [`EditSession`](crate::session::EditSession) operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The file could not be read or is not a valid highscores file.
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// Writing the surviving records failed. In-memory state is kept.
    #[error("Failed to save {}: {source}", path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot {operation} while the session is {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}
