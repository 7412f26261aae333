//! Error types for Roster-DB

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Roster-DB error types
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed persisted line
    #[error("parse error at {context}: {message}")]
    Parse {
        /// Where the bad input came from (field name or line description)
        context: String,
        /// What went wrong
        message: String,
    },

    /// Create with an id already present in the roster
    #[error("a record with id {id} already exists")]
    DuplicateId {
        /// The conflicting id
        id: u32,
    },

    /// Delete with an id absent from the roster
    #[error("no record with id {id}")]
    NotFound {
        /// The missing id
        id: u32,
    },

    /// GPA assignment outside the [0.0, 4.0] domain
    #[error("GPA {gpa} is outside the valid range 0.0..=4.0")]
    GpaOutOfRange {
        /// The rejected value
        gpa: f64,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `Parse` error with context.
    pub(crate) fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }
}
