//! Error types for the csvrow crate.

use thiserror::Error;

/// Errors that can occur when resolving a layout or writing a table.
///
/// Resolution errors are caller-input errors and are never retried. The
/// remaining variants only come from the writer pass-through and option
/// loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The input (or one of its records) has the wrong shape.
    #[error("{expected} required, {received} received")]
    TypeError {
        expected: &'static str,
        received: &'static str,
    },

    /// A header override does not match the number of surviving columns.
    #[error("{expected} values required for header, {received} received")]
    HeaderCountMismatch { expected: usize, received: usize },

    /// The delimiter cannot be written as a single byte.
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    /// CSV encoding failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// The destination writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// JSON input could not be parsed.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoded output was not valid UTF-8.
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for csvrow operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_mismatch_reports_both_counts() {
        let err = Error::HeaderCountMismatch {
            expected: 2,
            received: 3,
        };
        assert_eq!(err.to_string(), "2 values required for header, 3 received");
    }

    #[test]
    fn type_error_names_received_kind() {
        let err = Error::TypeError {
            expected: "array",
            received: "object",
        };
        assert_eq!(err.to_string(), "array required, object received");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
