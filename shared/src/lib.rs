//! Shared types for the Vitalis client
//!
//! Wire DTOs, the role enumeration, error codes and the backend error body.
//! These types mirror the JSON contract of the Vitalis REST API and are
//! consumed by `vitalis-client`.

pub mod client;
pub mod error;
pub mod models;
pub mod util;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiErrorBody, ErrorCode, FieldError};
pub use models::Role;
pub use validation::ValidationError;
