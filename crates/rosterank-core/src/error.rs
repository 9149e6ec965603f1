//! Error types for Rosterank core operations

use thiserror::Error;

use crate::record::StudentId;

/// Error produced by the entity validator.
///
/// Every variant is recoverable at the call boundary: the caller surfaces a
/// user-visible message and no state changes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The name was empty after trimming whitespace.
    #[error("Please enter the student's name.")]
    EmptyName,

    /// The score text did not parse as a finite number.
    #[error("Score must be a number.")]
    NotANumber {
        /// The raw score text as received, trimmed.
        raw: String,
    },

    /// The score parsed but fell outside the closed range [0, 100].
    #[error("Score must be between 0 and 100.")]
    OutOfRange {
        /// The parsed, out-of-range score.
        score: f64,
    },
}

/// Error produced by roster store operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RosterError {
    /// No record with the given id exists in the store.
    #[error("No student with id {0}")]
    NotFound(StudentId),
}
