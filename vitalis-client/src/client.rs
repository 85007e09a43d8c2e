//! Vitalis client context
//!
//! Owns the HTTP adapter and the session store and wires them together:
//! both share one [`AuthHeader`], and the adapter reports 401 responses to
//! the session.

use std::sync::Arc;

use shared::client::{AdminLoginRequest, LoginRequest, LoginResponse};

use crate::gate::RouteGuard;
use crate::http::{AuthHeader, HttpClient};
use crate::nav::Route;
use crate::session::{Identity, SessionStore};
use crate::storage::{CredentialStore, FileCredentialStore};
use crate::{ClientConfig, ClientError, ClientResult};

/// Application-wide client context
#[derive(Debug, Clone)]
pub struct VitalisClient {
    config: ClientConfig,
    pub(crate) http: HttpClient,
    session: SessionStore,
}

impl VitalisClient {
    /// Create a client persisting the credential under `config.storage_dir`
    ///
    /// The session starts in the loading state; call
    /// [`initialize`](Self::initialize) to restore it.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let storage = Arc::new(FileCredentialStore::new(
            config.storage_dir.clone(),
            &config.storage_key,
        ));
        Self::with_store(config, storage)
    }

    /// Create a client over a custom credential store
    pub fn with_store(config: ClientConfig, storage: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        let auth = AuthHeader::new();
        let http = HttpClient::new(&config, auth.clone())?;
        let session = SessionStore::new(storage, auth, config.login_policy);
        http.set_unauthorized_handler(session.unauthorized_handler());

        tracing::debug!(base_url = %config.base_url, "Vitalis client created");
        Ok(Self {
            config,
            http,
            session,
        })
    }

    /// Restore the persisted session
    pub fn initialize(&self) {
        self.session.initialize();
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Gate for `route` following this client's session
    pub fn guard(&self, route: Route) -> RouteGuard {
        RouteGuard::new(route, self.session.subscribe(), self.config.gate.clone())
    }

    /// Identity of the signed-in user, or [`ClientError::NotLoggedIn`]
    pub(crate) fn require_identity(&self) -> ClientResult<Identity> {
        self.session.identity().ok_or(ClientError::NotLoggedIn)
    }

    // ========== Auth API ==========

    /// Patient or clinic login
    ///
    /// Returns `None` only under [`LoginPolicy::Lenient`](crate::LoginPolicy)
    /// when the returned credential cannot be decoded.
    pub async fn login(&self, email: &str, senha: &str) -> ClientResult<Option<Identity>> {
        let request = LoginRequest::new(email, senha);
        request.validate()?;
        let response: LoginResponse = self.http.post("auth/login", &request).await?;
        Ok(self.session.login(&response.token)?)
    }

    /// Administrator login
    pub async fn admin_login(&self, username: &str, password: &str) -> ClientResult<Option<Identity>> {
        let request = AdminLoginRequest::new(username, password);
        request.validate()?;
        let response: LoginResponse = self.http.post("auth/login", &request).await?;
        Ok(self.session.login(&response.token)?)
    }

    /// End the session locally
    pub fn logout(&self) {
        self.session.logout();
    }
}
