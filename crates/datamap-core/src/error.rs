//! Error types for data map tree edits and JSON interchange.

use thiserror::Error;

/// Errors that can occur while editing a data map or loading one from JSON.
///
/// Code generation never fails: any tree that satisfies the model's
/// invariants produces complete output text, so the generators have no
/// error variants of their own.
#[derive(Error, Debug)]
pub enum DataMapError {
    /// The interchange input was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The JSON contained a value with no data map equivalent
    /// (null, an array, or a number outside the f64 range).
    #[error("Unsupported JSON value: {0}")]
    Unsupported(String),

    /// A path with a blank segment, a lookup through a non-object node,
    /// or an attempt to delete the root.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A path whose final or intermediate key is absent.
    /// The message carries the longest prefix that did resolve.
    #[error("Path not found: {0}")]
    NotFound(String),
}

/// Convenience alias used throughout datamap-core.
pub type Result<T> = std::result::Result<T, DataMapError>;
