//! Identity decoding from a bearer credential

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::{Deserialize, Serialize};
use shared::Role;
use thiserror::Error;

/// base64url, padding accepted or omitted
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a credential could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("credential is empty")]
    Empty,

    #[error("expected 3 segments, found {0}")]
    SegmentCount(usize),

    #[error("payload is not base64url: {0}")]
    Encoding(String),

    #[error("payload is not a valid claims object: {0}")]
    Payload(String),
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
    role: Role,
}

/// Signed-in user, derived from the credential payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// `sub` claim (the user's email)
    pub subject: String,
    pub role: Role,
}

impl Identity {
    pub fn new(subject: impl Into<String>, role: Role) -> Self {
        Self {
            subject: subject.into(),
            role,
        }
    }

    /// Decode the identity from `header.payload.signature`
    ///
    /// The signature is not verified and `exp` is ignored.
    pub fn decode(credential: &str) -> Result<Self, CredentialError> {
        if credential.is_empty() {
            return Err(CredentialError::Empty);
        }

        let parts: Vec<&str> = credential.split('.').collect();
        if parts.len() != 3 {
            return Err(CredentialError::SegmentCount(parts.len()));
        }

        let payload = PAYLOAD_ENGINE
            .decode(parts[1])
            .map_err(|e| CredentialError::Encoding(e.to_string()))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| CredentialError::Payload(e.to_string()))?;

        Ok(Self {
            subject: claims.sub,
            role: claims.role,
        })
    }
}
