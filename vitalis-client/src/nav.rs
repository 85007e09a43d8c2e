//! Route table and role-based navigation

use shared::Role;

use crate::gate::{self, GateOutcome};
use crate::session::SessionSnapshot;

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user
    Authenticated,
    Roles(&'static [Role]),
}

impl Access {
    /// Gate outcome for this requirement; public routes are always allowed
    pub fn evaluate(&self, session: &SessionSnapshot) -> GateOutcome {
        match self {
            Access::Public => GateOutcome::Allowed,
            Access::Authenticated => gate::evaluate(session, None),
            Access::Roles(roles) => gate::evaluate(session, Some(*roles)),
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        match self {
            Access::Public | Access::Authenticated => true,
            Access::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    AdminLogin,
    Clinics,
    Dashboard,
    MyAppointments,
    MedicalRecords,
    ClinicManagement,
    AdminTester,
    AdminRequests,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::AdminLogin,
        Route::Clinics,
        Route::Dashboard,
        Route::MyAppointments,
        Route::MedicalRecords,
        Route::ClinicManagement,
        Route::AdminTester,
        Route::AdminRequests,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::AdminLogin => "/admin/login",
            Route::Clinics => "/clinicas",
            Route::Dashboard => "/dashboard",
            Route::MyAppointments => "/meus-agendamentos",
            Route::MedicalRecords => "/prontuario",
            Route::ClinicManagement => "/gestao",
            Route::AdminTester => "/admin/tester",
            Route::AdminRequests => "/admin/requisicoes",
        }
    }

    /// Parse a path; `/` is the clinic marketplace
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => return Some(Route::Clinics),
            p => p,
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub const fn access(&self) -> Access {
        match self {
            Route::Login | Route::AdminLogin | Route::Clinics => Access::Public,
            Route::Dashboard => Access::Authenticated,
            Route::MyAppointments | Route::MedicalRecords => Access::Roles(&[Role::Patient]),
            Route::ClinicManagement => Access::Roles(&[Role::Clinic]),
            Route::AdminTester | Route::AdminRequests => Access::Roles(&[Role::Admin]),
        }
    }
}

/// Entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    const fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }

    pub const fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Navigation bar entries for a role
pub fn nav_links(role: Role) -> &'static [NavLink] {
    const PATIENT: &[NavLink] = &[
        NavLink::new("Buscar Clínicas", Route::Clinics),
        NavLink::new("Meus Agendamentos", Route::MyAppointments),
        NavLink::new("Prontuário", Route::MedicalRecords),
    ];
    const CLINIC: &[NavLink] = &[
        NavLink::new("Dashboard", Route::ClinicManagement),
        NavLink::new("Marketplace", Route::Clinics),
    ];
    const ADMIN: &[NavLink] = &[
        NavLink::new("Requisições", Route::AdminRequests),
        NavLink::new("API Tester", Route::AdminTester),
    ];

    match role {
        Role::Patient => PATIENT,
        Role::Clinic => CLINIC,
        Role::Admin => ADMIN,
    }
}

/// Where a user lands after signing in
pub const fn home_for(role: Role) -> Route {
    match role {
        Role::Patient => Route::Clinics,
        Role::Clinic => Route::ClinicManagement,
        Role::Admin => Route::AdminTester,
    }
}
