// Typed errors with thiserror. Surface meaningful messages to JS.
// Missing DOM collaborators are never errors; the engine degrades to no-ops
// and only the JSON boundary can actually fail.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid event batch: {0}")]
    InvalidEvents(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}
