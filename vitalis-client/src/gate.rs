//! Route authorization gate
//!
//! Decides, from a session snapshot and a route's role requirement, whether a
//! view may render or where the user is sent instead.

use shared::Role;
use tokio::sync::watch;

use crate::nav::Route;
use crate::session::SessionSnapshot;

/// Redirect targets used by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Where unauthenticated users are sent
    pub login_path: String,
    /// Where authenticated users without the required role are sent
    pub landing_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            login_path: Route::Login.path().to_string(),
            landing_path: Route::Clinics.path().to_string(),
        }
    }
}

/// Result of evaluating a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Session is still being restored; render a placeholder
    Loading,
    RedirectToLogin,
    RedirectToLanding,
    Allowed,
}

impl GateOutcome {
    /// Path to navigate to, `None` unless the outcome is a redirect
    pub fn redirect_target<'a>(&self, config: &'a GateConfig) -> Option<&'a str> {
        match self {
            GateOutcome::RedirectToLogin => Some(config.login_path.as_str()),
            GateOutcome::RedirectToLanding => Some(config.landing_path.as_str()),
            GateOutcome::Loading | GateOutcome::Allowed => None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GateOutcome::Allowed)
    }
}

/// Evaluate a gate
///
/// `required_roles` of `None` admits any authenticated user. Checks run in
/// order: loading, authentication, role membership.
pub fn evaluate(session: &SessionSnapshot, required_roles: Option<&[Role]>) -> GateOutcome {
    if session.is_loading {
        return GateOutcome::Loading;
    }
    let Some(role) = session.role() else {
        return GateOutcome::RedirectToLogin;
    };
    match required_roles {
        Some(roles) if !roles.contains(&role) => GateOutcome::RedirectToLanding,
        _ => GateOutcome::Allowed,
    }
}

/// Gate bound to a route and a live session subscription
///
/// Re-evaluates whenever the session changes, so a logout while the view is
/// mounted produces a redirect.
#[derive(Debug)]
pub struct RouteGuard {
    route: Route,
    session: watch::Receiver<SessionSnapshot>,
    config: GateConfig,
}

impl RouteGuard {
    pub fn new(route: Route, session: watch::Receiver<SessionSnapshot>, config: GateConfig) -> Self {
        Self {
            route,
            session,
            config,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Outcome for the current session state
    pub fn outcome(&mut self) -> GateOutcome {
        let snapshot = self.session.borrow_and_update();
        self.route.access().evaluate(&snapshot)
    }

    /// Wait for the next session change and re-evaluate
    ///
    /// Returns `None` once the session store has been dropped.
    pub async fn changed(&mut self) -> Option<GateOutcome> {
        self.session.changed().await.ok()?;
        Some(self.outcome())
    }

    /// Redirect target for the current outcome
    pub fn redirect(&mut self) -> Option<String> {
        let outcome = self.outcome();
        outcome.redirect_target(&self.config).map(str::to_string)
    }
}
