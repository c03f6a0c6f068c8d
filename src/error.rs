//! Error types for the healthtrace library.

use thiserror::Error;

/// Result type alias for healthtrace operations.
pub type Result<T> = std::result::Result<T, HealthtraceError>;

/// Errors that can occur while loading or preparing health data.
///
/// The discrepancy engine itself is total and never returns these; they
/// belong to the ingestion layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HealthtraceError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// File could not be read. Carries the rendered I/O error message.
    #[error("io error: {0}")]
    Io(String),

    /// A record line could not be parsed.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A required column is missing from the header.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// The requested column holds no numeric values.
    #[error("column is not numeric: {0}")]
    NonNumericColumn(String),

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl HealthtraceError {
    /// Wrap a `std::io::Error`, keeping the error type cloneable.
    pub fn io(err: std::io::Error) -> Self {
        HealthtraceError::Io(err.to_string())
    }
}
