//! Error types for the registration forms

use thiserror::Error;

/// Errors raised at the form boundary (answer parsing, sinks, patterns)
#[derive(Error, Debug)]
pub enum FormError {
    /// Field name not part of the form's schema
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Answer value has the wrong shape for the field kind
    #[error("field {field} expects {expected}")]
    KindMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// Option outside the field's enumerated set
    #[error("{value:?} is not an option of {field}")]
    InvalidChoice { field: &'static str, value: String },

    /// Field cannot be filled from a plain answer
    #[error("field {0} is captured by its own widget")]
    NotAnswerable(&'static str),

    /// Validation pattern failed to compile
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Submission sink failed to accept a record
    #[error("sink error: {0}")]
    Sink(String),
}

/// Result type for the registration forms
pub type Result<T> = std::result::Result<T, FormError>;
