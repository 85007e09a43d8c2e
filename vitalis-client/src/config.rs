//! Client configuration

use std::path::PathBuf;

use crate::gate::GateConfig;

/// What `login` does with a credential whose payload cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginPolicy {
    /// Decode first; a malformed credential is rejected and nothing changes
    #[default]
    Atomic,
    /// Store the credential and set the header anyway, leaving the identity
    /// unset (the session stays unauthenticated)
    Lenient,
}

/// Client configuration for connecting to the Vitalis API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the persisted credential
    pub storage_dir: PathBuf,

    /// Key (file stem) under which the credential is persisted
    pub storage_key: String,

    /// Behavior of `login` on an undecodable credential
    pub login_policy: LoginPolicy,

    /// Redirect targets of the route gate
    pub gate: GateConfig,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            storage_dir: PathBuf::from(".vitalis"),
            storage_key: "token".to_string(),
            login_policy: LoginPolicy::default(),
            gate: GateConfig::default(),
        }
    }

    /// Build a configuration from `VITALIS_*` environment variables
    ///
    /// - `VITALIS_API_URL`: base URL
    /// - `VITALIS_TIMEOUT_SECS`: request timeout
    /// - `VITALIS_STORAGE_DIR`: credential directory
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("VITALIS_API_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = std::env::var("VITALIS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = timeout;
        }
        if let Ok(dir) = std::env::var("VITALIS_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(dir);
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the credential directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Set the credential storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the login policy
    pub fn with_login_policy(mut self, policy: LoginPolicy) -> Self {
        self.login_policy = policy;
        self
    }

    /// Set the gate redirect targets
    pub fn with_gate(mut self, gate: GateConfig) -> Self {
        self.gate = gate;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
