//! Input validation helpers
//!
//! Length limits and checks applied to request bodies before they leave the
//! client. Limits follow the backend bean-validation constraints.

use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Request ticket title
pub const MAX_TITLE_LEN: usize = 200;

/// Request ticket requester name
pub const MAX_REQUESTER_LEN: usize = 100;

/// Notes, descriptions, symptoms, prescriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Lowest and highest rating score
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A request body failed client-side validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError::new(
            field,
            format!("is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}
