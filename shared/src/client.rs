//! Client-related types shared with the backend
//!
//! Request/response bodies of the authentication endpoint.

use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Patient/clinic login request (`POST /auth/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            senha: senha.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required_text(&self.email, "email", validation::MAX_EMAIL_LEN)?;
        validation::validate_required_text(&self.senha, "senha", validation::MAX_PASSWORD_LEN)
    }
}

/// Admin login request (`POST /auth/login`, username form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

impl AdminLoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required_text(
            &self.username,
            "username",
            validation::MAX_EMAIL_LEN,
        )?;
        validation::validate_required_text(
            &self.password,
            "password",
            validation::MAX_PASSWORD_LEN,
        )
    }
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let req = LoginRequest::new("joao@email.com", "123456");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "joao@email.com");
        assert_eq!(json["senha"], "123456");
    }

    #[test]
    fn test_login_request_requires_fields() {
        assert!(LoginRequest::new("", "123456").validate().is_err());
        assert!(LoginRequest::new("joao@email.com", "  ").validate().is_err());
        assert!(LoginRequest::new("joao@email.com", "123456").validate().is_ok());
    }

    #[test]
    fn test_admin_login_request_requires_fields() {
        assert!(AdminLoginRequest::new("admin", "").validate().is_err());
        assert!(AdminLoginRequest::new("admin", "admin123").validate().is_ok());
    }

    #[test]
    fn test_login_response_parse() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"a.b.c"}"#).unwrap();
        assert_eq!(resp.token, "a.b.c");
    }
}
