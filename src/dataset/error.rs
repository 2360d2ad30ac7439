//! Dataset load error types
//!
//! Defines every way fetching or decoding the dataset document can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
///
/// None of these are fatal: the dashboard keeps its previous dataset and
/// reports the failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Connection failed or the request could not be sent
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Reading a local dataset file failed
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// The document is not valid JSON or does not match the dataset schema
    #[error("Malformed dataset: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::Status {
            status: 404,
            url: "http://localhost/sideData.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 404 from http://localhost/sideData.json"
        );

        assert_eq!(LoadError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let load_err: LoadError = json_err.into();
        assert!(matches!(load_err, LoadError::Decode(_)));
    }
}
