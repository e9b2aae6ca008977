/// Unified error types for the fedialias gateway
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required query parameter or header is absent
    #[error("{0}")]
    MissingInput(String),

    /// The input matches none of the accepted identity grammars
    #[error("{0}")]
    InvalidFormat(String),

    /// Well-formed input with no configured alias
    #[error("Not Found")]
    NotFound,

    /// A stored alias value fails its target grammar (operator defect)
    #[error("corrupt alias value: {0}")]
    CorruptAlias(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Convert GatewayError to HTTP response
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GatewayError::MissingInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::InvalidFormat(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            GatewayError::CorruptAlias(value) => {
                // Operator misconfiguration: log the offending value, hide it
                // from the client.
                tracing::error!(alias = %value, "stored alias fails target grammar");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            GatewayError::Config(_) | GatewayError::Internal(_) | GatewayError::Io(_) => {
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(), // Don't leak details
                )
            }
        };

        let body = Json(ErrorBody { error: message });

        (status, body).into_response()
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
