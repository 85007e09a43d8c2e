//! Backend error body

use serde::{Deserialize, Serialize};

/// One field-level validation message
///
/// Matches the shape of bean-validation errors (`defaultMessage`, `field`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub default_message: String,
}

/// Error body returned by the backend on non-2xx responses
///
/// Every field is optional: the backend emits several shapes (framework
/// default errors, handler messages, validation lists).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Reason phrase of the framework default error body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field-level validation errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiErrorBody {
    /// Parse a raw response body, `None` if it is not a JSON error object
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Validation messages joined with ", "
    pub fn field_messages(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.default_message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// The single notification text a view should display
    ///
    /// Field messages win over the generic message, which wins over the
    /// reason phrase.
    pub fn user_message(&self) -> Option<String> {
        self.field_messages()
            .or_else(|| self.message.clone().filter(|m| !m.is_empty()))
            .or_else(|| self.error.clone())
    }
}
