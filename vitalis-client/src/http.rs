//! HTTP adapter for the Vitalis API
//!
//! Every request carries `Authorization: Bearer <credential>` while a
//! credential is set. A 401 on such a request is reported, together with the
//! credential it carried, to the registered [`UnauthorizedHandler`] before the
//! error is returned to the caller.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Bearer credential attached to outgoing requests
///
/// Cloned handles share the same slot.
#[derive(Debug, Clone, Default)]
pub struct AuthHeader(Arc<RwLock<Option<String>>>);

impl AuthHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, credential: impl Into<String>) {
        *self.0.write() = Some(credential.into());
    }

    pub fn clear(&self) {
        *self.0.write() = None;
    }

    /// Raw credential, if set
    pub fn credential(&self) -> Option<String> {
        self.0.read().clone()
    }

    pub fn is_set(&self) -> bool {
        self.0.read().is_some()
    }
}

/// Receives authorization failures of authenticated requests
pub trait UnauthorizedHandler: Send + Sync {
    /// `credential` is the one the rejected request was sent with
    fn on_unauthorized(&self, credential: &str);
}

type HandlerSlot = Arc<RwLock<Option<Weak<dyn UnauthorizedHandler>>>>;

/// HTTP client for the Vitalis API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    auth: AuthHeader,
    handler: HandlerSlot,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.auth.is_set())
            .finish()
    }
}

impl HttpClient {
    /// Create a new HTTP client sharing `auth` with the session
    pub fn new(config: &ClientConfig, auth: AuthHeader) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
            handler: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthHeader {
        &self.auth
    }

    /// Register the handler notified on 401 responses
    ///
    /// Only a weak reference is kept.
    pub fn set_unauthorized_handler(&self, handler: Weak<dyn UnauthorizedHandler>) {
        *self.handler.write() = Some(handler);
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request, attaching the bearer header and intercepting 401
    async fn execute(&self, request: RequestBuilder) -> ClientResult<Response> {
        let sent = self.auth.credential();
        let authenticated = sent.is_some();
        let request = match &sent {
            Some(credential) => request.header(AUTHORIZATION, format!("Bearer {credential}")),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), %status, authenticated, "API response");

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            if let Some(credential) = &sent {
                self.notify_unauthorized(credential);
            }
        }

        let text = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status, &text))
    }

    fn notify_unauthorized(&self, credential: &str) {
        let handler = self.handler.read().as_ref().and_then(Weak::upgrade);
        match handler {
            Some(handler) => {
                tracing::info!("Authorization rejected");
                handler.on_unauthorized(credential);
            }
            None => tracing::warn!("Authorization rejected with no session attached"),
        }
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::json(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self
            .execute(self.request(Method::GET, path).query(query))
            .await?;
        Self::json(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Self::json(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute(self.request(Method::POST, path)).await?;
        Self::json(response).await
    }

    /// Make a POST request without body, returning the plain-text response
    pub async fn post_text(&self, path: &str) -> ClientResult<String> {
        let response = self.execute(self.request(Method::POST, path)).await?;
        Ok(response.text().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        Self::json(response).await
    }

    /// Make a PATCH request whose arguments travel in the query string
    pub async fn patch_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self
            .execute(self.request(Method::PATCH, path).query(query))
            .await?;
        Self::json(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_shared_between_clones() {
        let auth = AuthHeader::new();
        let other = auth.clone();
        assert!(auth.credential().is_none());

        other.set("abc.def.ghi");
        assert_eq!(auth.credential().as_deref(), Some("abc.def.ghi"));
        assert!(auth.is_set());

        auth.clear();
        assert!(!other.is_set());
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("http://localhost:8080/api/");
        let http = HttpClient::new(&config, AuthHeader::new()).unwrap();
        assert_eq!(http.base_url(), "http://localhost:8080/api");
        assert_eq!(http.url("/clinicas/1"), "http://localhost:8080/api/clinicas/1");
        assert_eq!(http.url("auth/login"), "http://localhost:8080/api/auth/login");
    }

    #[test]
    fn test_debug_hides_credential() {
        let auth = AuthHeader::new();
        auth.set("secret-token");
        let http = HttpClient::new(&ClientConfig::default(), auth).unwrap();
        let rendered = format!("{http:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("authenticated: true"));
    }
}
