//! Client error types

use reqwest::StatusCode;
use shared::error::{ApiErrorBody, ErrorCode, FieldError};
use shared::validation::ValidationError;
use thiserror::Error;

use crate::session::SessionError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend answered 401
    #[error("Authentication required")]
    Unauthorized,

    /// Backend answered 403
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Backend answered 404
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered 409
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Request rejected by client-side or backend validation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    /// Any other non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The action needs a signed-in user
    #[error("Not logged in")]
    NotLoggedIn,

    /// The credential returned by the backend could not be used
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-2xx response onto an error variant
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = ApiErrorBody::parse(body).unwrap_or_default();
        let message = parsed
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation {
                    message: parsed.user_message().unwrap_or(message),
                    errors: parsed.errors,
                }
            }
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Error code for notification lookup
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(_) => ErrorCode::NetworkError,
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                ErrorCode::InvalidFormat
            }
            ClientError::Unauthorized | ClientError::NotLoggedIn => ErrorCode::NotAuthenticated,
            ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
            ClientError::NotFound(_) => ErrorCode::NotFound,
            ClientError::Conflict(_) => ErrorCode::AlreadyExists,
            ClientError::Validation { .. } => ErrorCode::ValidationFailed,
            ClientError::Server { status, .. } => StatusCode::from_u16(*status)
                .map(ErrorCode::from_status)
                .unwrap_or(ErrorCode::Unknown),
            ClientError::Session(_) => ErrorCode::TokenInvalid,
        }
    }

    /// Whether this error ended the session
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::NotLoggedIn)
    }

    /// The single notification text a view should display
    ///
    /// Validation messages are concatenated with ", ".
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Forbidden(m)
            | ClientError::NotFound(m)
            | ClientError::Conflict(m)
            | ClientError::Server { message: m, .. }
                if !m.is_empty() =>
            {
                m.clone()
            }
            other => other.code().message().to_string(),
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation {
            message: err.message.clone(),
            errors: vec![FieldError {
                field: Some(err.field),
                default_message: err.message,
            }],
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
