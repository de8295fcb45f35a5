//! Error types for record loading.

use thiserror::Error;

/// Failure to decode the input text into a list of users.
///
/// Raised for malformed JSON and for fields of the wrong type
/// (e.g. a quoted `age`). Wraps the underlying decode error.
#[derive(Debug, Error)]
#[error("failed to parse input data: {source}")]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}
