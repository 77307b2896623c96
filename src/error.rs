//! Unified SDK error types.

use thiserror::Error;

/// Message carried by [`RequestError::ServerError`].
pub const SERVER_EXCEPTION_MESSAGE: &str = "server is exception";

/// Top-level SDK error, returned when building a client.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

/// Failure of a single API call.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never produced a readable response (connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The platform answered with an HTTP status other than 200.
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// The response body was not valid JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The platform rejected the request with a non-success `code`.
    #[error("Application error {code}: {message}")]
    Application { code: i64, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Discriminant of [`RequestError`], for callers that branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestErrorKind {
    Transport,
    ServerError,
    MalformedResponse,
    ApplicationError,
    Serialization,
}

impl RequestError {
    pub fn kind(&self) -> RequestErrorKind {
        match self {
            Self::Transport(_) => RequestErrorKind::Transport,
            Self::ServerError { .. } => RequestErrorKind::ServerError,
            Self::MalformedResponse(_) => RequestErrorKind::MalformedResponse,
            Self::Application { .. } => RequestErrorKind::ApplicationError,
            Self::Serialization(_) => RequestErrorKind::Serialization,
        }
    }

    /// The platform's error code, for application errors.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Application { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Transport failures and server errors may succeed if sent again.
    /// The SDK itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::ServerError { .. })
    }
}

/// Result alias for API calls.
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors raised by a [`Transport`](crate::http::Transport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}
