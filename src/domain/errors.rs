//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Shown when the query is empty. No network call is made.
pub const VALIDATION_MESSAGE: &str = "Please enter a word to look up.";

/// Shown for any service or parse failure. Raw detail goes to the log only.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, we couldn't look up that word right now. Please try again.";

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Query is empty")]
    Validation,

    #[error("Language service error: {0}")]
    Service(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Speech output error: {0}")]
    Speech(String),

    #[error("UI error: {0}")]
    Ui(String),
}

/// Structured reply did not match the declared entry shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed reply: {0}")]
    Malformed(String),
}
