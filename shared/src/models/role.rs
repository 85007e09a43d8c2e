//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Account role carried in the `role` claim of a credential
///
/// Wire tags follow the backend authority names (`ROLE_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_PACIENTE")]
    Patient,
    #[serde(rename = "ROLE_CLINICA")]
    Clinic,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Patient, Role::Clinic, Role::Admin];

    /// Wire tag, e.g. `ROLE_PACIENTE`
    pub const fn tag(&self) -> &'static str {
        match self {
            Role::Patient => "ROLE_PACIENTE",
            Role::Clinic => "ROLE_CLINICA",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Label shown next to the signed-in user
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Paciente",
            Role::Clinic => "Clínica",
            Role::Admin => "Administrador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Role tag outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role tag: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.tag() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
