use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::watch;

use super::{Identity, SessionError, SessionSnapshot};
use crate::config::LoginPolicy;
use crate::http::{AuthHeader, UnauthorizedHandler};
use crate::storage::CredentialStore;

struct SessionInner {
    storage: Arc<dyn CredentialStore>,
    auth: AuthHeader,
    policy: LoginPolicy,
    state: watch::Sender<SessionSnapshot>,
    /// Serializes storage, header and state updates
    write_lock: Mutex<()>,
}

impl SessionInner {
    fn persist(&self, credential: &str) {
        if let Err(e) = self.storage.save(credential) {
            tracing::warn!(error = %e, "Failed to persist credential");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "Failed to clear stored credential");
        }
        self.auth.clear();
        self.state.send_modify(|s| {
            s.credential = None;
            s.identity = None;
        });
    }

    fn logout(&self) {
        let _guard = self.write_lock.lock();
        self.logout_locked();
    }

    /// Caller holds `write_lock`
    fn logout_locked(&self) {
        let subject = self.state.borrow().subject().map(str::to_string);
        self.clear();
        tracing::info!(subject = subject.as_deref().unwrap_or("-"), "Logged out");
    }
}

impl UnauthorizedHandler for SessionInner {
    /// Ends the session only if it still holds the rejected credential
    fn on_unauthorized(&self, credential: &str) {
        let _guard = self.write_lock.lock();
        let current = self.state.borrow().credential.as_deref() == Some(credential);
        if !current {
            tracing::debug!("Ignoring 401 for a replaced credential");
            return;
        }
        self.logout_locked();
    }
}

/// Session store handle
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("SessionStore")
            .field("identity", &snapshot.identity)
            .field("is_loading", &snapshot.is_loading)
            .field("policy", &self.inner.policy)
            .finish()
    }
}

impl SessionStore {
    /// Create a store in the loading state
    ///
    /// `auth` is the header slot shared with the HTTP adapter.
    pub fn new(storage: Arc<dyn CredentialStore>, auth: AuthHeader, policy: LoginPolicy) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::loading());
        Self {
            inner: Arc::new(SessionInner {
                storage,
                auth,
                policy,
                state,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Handler that ends this session on a 401
    pub fn unauthorized_handler(&self) -> Weak<dyn UnauthorizedHandler> {
        let weak: Weak<SessionInner> = Arc::downgrade(&self.inner);
        weak
    }

    /// Restore the stored credential
    ///
    /// An undecodable credential is discarded. Only the first call has any
    /// effect; `is_loading` is false afterwards.
    pub fn initialize(&self) {
        let inner = &self.inner;
        let _guard = inner.write_lock.lock();
        if !inner.state.borrow().is_loading {
            tracing::debug!("Session already initialized");
            return;
        }

        let stored = match inner.storage.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored credential");
                inner.clear();
                None
            }
        };

        match stored {
            None => tracing::debug!("No stored credential"),
            Some(credential) => match Identity::decode(&credential) {
                Ok(identity) => {
                    tracing::info!(
                        subject = %identity.subject,
                        role = %identity.role,
                        "Session restored"
                    );
                    inner.auth.set(credential.as_str());
                    inner.state.send_modify(|s| {
                        s.credential = Some(credential);
                        s.identity = Some(identity);
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed stored credential");
                    inner.clear();
                }
            },
        }

        inner.state.send_modify(|s| s.is_loading = false);
    }

    /// Replace the session with `credential`
    ///
    /// Returns the decoded identity. Under [`LoginPolicy::Lenient`] a
    /// malformed credential is still stored and `Ok(None)` is returned.
    pub fn login(&self, credential: &str) -> Result<Option<Identity>, SessionError> {
        if credential.is_empty() {
            return Err(SessionError::EmptyCredential);
        }

        let inner = &self.inner;
        let decoded = Identity::decode(credential);
        if let (Err(e), LoginPolicy::Atomic) = (&decoded, inner.policy) {
            tracing::warn!(error = %e, "Rejected malformed credential");
            return Err(SessionError::MalformedCredential(e.clone()));
        }

        let identity = match decoded {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(error = %e, "Keeping undecodable credential");
                None
            }
        };

        let _guard = inner.write_lock.lock();
        inner.persist(credential);
        inner.auth.set(credential);
        if let Some(identity) = &identity {
            tracing::info!(subject = %identity.subject, role = %identity.role, "Logged in");
        }

        inner.state.send_modify(|s| {
            s.credential = Some(credential.to_string());
            s.identity = identity.clone();
        });
        Ok(identity)
    }

    /// Clear the session; safe to call when already logged out
    pub fn logout(&self) {
        self.inner.logout();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every session change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.state.borrow().identity.clone()
    }

    pub fn policy(&self) -> LoginPolicy {
        self.inner.policy
    }
}
