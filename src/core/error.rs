//! Transition table error types.

use thiserror::Error;

/// Errors that can occur while loading or saving a transition table
#[derive(Debug, Error)]
pub enum TableError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed, or the decoded table was invalid
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
