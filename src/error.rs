//! Error types for the textstat pipeline.

use thiserror::Error;

/// The main error type for textstat operations.
#[derive(Error, Debug)]
pub enum TextStatError {
    /// A locale string could not be decomposed into
    /// `language[_COUNTRY[_VARIANT]]`.
    #[error("Unrecognized locale: {0}")]
    UnrecognizedLocale(String),

    /// I/O error while reading the document or writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Empty input where content was required.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for textstat operations.
pub type Result<T> = std::result::Result<T, TextStatError>;
