//! Vitalis Client - session-aware HTTP client for the Vitalis API
//!
//! Holds the signed-in identity decoded from the bearer credential, persists
//! the credential across restarts, attaches it to every request, and decides
//! which views the current user may open.
//!
//! ```no_run
//! use vitalis_client::{ClientConfig, Route, VitalisClient};
//!
//! # async fn example() -> Result<(), vitalis_client::ClientError> {
//! let client = VitalisClient::new(ClientConfig::default())?;
//! client.initialize();
//!
//! client.login("joao@email.com", "123456").await?;
//! let mut guard = client.guard(Route::MyAppointments);
//! println!("{:?}", guard.outcome());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod nav;
pub mod session;
pub mod storage;

pub use client::VitalisClient;
pub use config::{ClientConfig, LoginPolicy};
pub use error::{ClientError, ClientResult};
pub use gate::{GateConfig, GateOutcome, RouteGuard};
pub use http::{AuthHeader, HttpClient, UnauthorizedHandler};
pub use nav::{Access, NavLink, Route};
pub use session::{CredentialError, Identity, SessionError, SessionSnapshot, SessionStore};
pub use storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StorageError};

// Re-export shared types for convenience
pub use shared::Role;
pub use shared::client::{AdminLoginRequest, LoginRequest, LoginResponse};
