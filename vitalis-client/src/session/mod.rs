//! Client-side session state
//!
//! The session holds the raw credential and the [`Identity`] decoded from it.
//! It is restored from durable storage once at startup, replaced by `login`
//! and cleared by `logout`. Every change is published as a
//! [`SessionSnapshot`] to subscribers.

mod identity;
mod store;

pub use identity::{CredentialError, Identity};
pub use store::SessionStore;

use serde::Serialize;
use shared::Role;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Credential is empty")]
    EmptyCredential,

    #[error("Malformed credential: {0}")]
    MalformedCredential(#[from] CredentialError),
}

/// Point-in-time view of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub credential: Option<String>,
    pub identity: Option<Identity>,
    /// True until the stored credential has been restored
    pub is_loading: bool,
}

impl SessionSnapshot {
    pub(crate) fn loading() -> Self {
        Self {
            credential: None,
            identity: None,
            is_loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    pub fn subject(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.subject.as_str())
    }
}
