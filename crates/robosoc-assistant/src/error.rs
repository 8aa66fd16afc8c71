//! Error types for the assistant

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, Error>;

/// Returned to the client when the request carries no usable message
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";

/// Returned to the client for every internal failure; the cause stays in the logs
pub const BUSY_MESSAGE: &str = "Our robotics team is busy upgrading! Please try again later.";

/// Assistant errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required credential missing from the environment
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    /// No configured document produced any text
    #[error("Knowledge base is empty: {0}")]
    EmptyKnowledgeBase(String),

    /// Document parsing error
    #[error("Failed to parse document '{path}': {message}")]
    DocumentParse { path: String, message: String },

    /// Chat request without a message
    #[error("{}", EMPTY_MESSAGE)]
    EmptyMessage,

    /// Completion service error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a document parse error
    pub fn document_parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DocumentParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::EmptyMessage => (StatusCode::BAD_REQUEST, EMPTY_MESSAGE),
            other => {
                tracing::error!("Chat error: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, BUSY_MESSAGE)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
