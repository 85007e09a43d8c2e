//! Unified error system for the Vitalis client
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ApiErrorBody`]: Error body returned by the backend
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiErrorBody, ErrorCode};
//! use shared::http::StatusCode;
//!
//! let body = ApiErrorBody::parse(r#"{"message":"Clínica não encontrada"}"#).unwrap();
//! assert_eq!(body.user_message().as_deref(), Some("Clínica não encontrada"));
//! assert_eq!(ErrorCode::from_status(StatusCode::NOT_FOUND), ErrorCode::NotFound);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiErrorBody, FieldError};
