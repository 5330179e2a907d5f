//! Error types for fedigraph.

use thiserror::Error;

use crate::graphql::GraphQlError;

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    // === Transport Errors ===
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("WebSocket error: {0}")]
    WebSocket(String),

    #[error("Subscription protocol error: {0}")]
    Protocol(String),

    #[error("Timed out waiting for {0}")]
    Timeout(String),

    #[error("Client is closed")]
    Closed,

    // === Response Errors ===
    #[error("GraphQL error: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),

    #[error("Response has no data for {0}")]
    MissingData(String),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    // === Local Errors ===
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ClientError {
    /// Returns a stable error code for logging.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::Status { .. } => "UNEXPECTED_STATUS",
            Self::WebSocket(_) => "WEBSOCKET_ERROR",
            Self::Protocol(_) => "PROTOCOL_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Closed => "CLIENT_CLOSED",
            Self::GraphQl(_) => "GRAPHQL_ERROR",
            Self::MissingData(_) => "MISSING_DATA",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidUrl(_) => "INVALID_URL",
        }
    }

    /// GraphQL errors carried by this error, empty for every other variant.
    #[must_use]
    pub fn graphql_errors(&self) -> &[GraphQlError] {
        match self {
            Self::GraphQl(errors) => errors,
            _ => &[],
        }
    }

    /// Returns whether the failure happened before a response was read.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::WebSocket(_) | Self::Timeout(_)
        )
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Self::WebSocket(err.to_string())
    }
}
