//! Persistent credential storage
//!
//! The credential survives restarts as `<dir>/<key>.json`:
//!
//! ```json
//! { "token": "header.payload.signature" }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid credential file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable key-value slot holding the raw credential
pub trait CredentialStore: Send + Sync {
    /// Stored credential, `None` when nothing is stored
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&self, credential: &str) -> Result<(), StorageError>;

    /// Remove the stored credential; clearing an empty store succeeds
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCredential {
    token: String,
}

/// Credential store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store at `<dir>/<key>.json`
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        let path = dir.into().join(format!("{key}.json"));
        Self { path }
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let stored: StoredCredential = serde_json::from_str(&json)?;
        Ok(Some(stored.token))
    }

    fn save(&self, credential: &str) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(&StoredCredential {
            token: credential.to_string(),
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory credential store, lost on drop
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(credential.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, credential: &str) -> Result<(), StorageError> {
        *self.slot.lock() = Some(credential.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
