//! Appointment Model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::medical_record::MedicalRecord;
use super::procedure::Procedure;
use crate::util::{booking_time, display_time};
use crate::validation::{self, ValidationError};

/// Appointment lifecycle status
///
/// PENDENTE → CONFIRMADO → REALIZADO, or CANCELADO from any non-final state.
/// Transitions are enforced by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pendente,
    Confirmado,
    Realizado,
    Cancelado,
}

impl AppointmentStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::Confirmado => "CONFIRMADO",
            Self::Realizado => "REALIZADO",
            Self::Cancelado => "CANCELADO",
        }
    }

    /// No further transition is possible
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Realizado | Self::Cancelado)
    }

    /// Only completed visits can be rated
    pub const fn can_rate(&self) -> bool {
        matches!(self, Self::Realizado)
    }

    /// Statuses a clinic may move this appointment to
    pub fn next_statuses(&self) -> &'static [AppointmentStatus] {
        match self {
            Self::Pendente => &[Self::Confirmado, Self::Cancelado],
            Self::Confirmado => &[Self::Realizado, Self::Cancelado],
            Self::Realizado | Self::Cancelado => &[],
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking payload (`POST /agendamentos`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub clinica_id: i64,
    pub procedimento_ids: Vec<i64>,
    #[serde(with = "booking_time")]
    pub data_hora: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

impl AppointmentRequest {
    /// Check the booking against the backend constraints
    ///
    /// `now` is injected so the future-date rule stays testable.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), ValidationError> {
        if self.procedimento_ids.is_empty() {
            return Err(ValidationError::new(
                "procedimentoIds",
                "Selecione pelo menos um procedimento",
            ));
        }
        if self.data_hora <= now {
            return Err(ValidationError::new(
                "dataHora",
                "A data do agendamento deve ser no futuro",
            ));
        }
        validation::validate_optional_text(
            &self.observacoes,
            "observacoes",
            validation::MAX_NOTE_LEN,
        )
    }
}

/// Appointment as returned to patients and clinics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub paciente_nome: String,
    pub clinica_nome_fantasia: String,
    #[serde(default)]
    pub procedimentos: Vec<Procedure>,
    #[serde(with = "display_time")]
    pub data_hora: NaiveDateTime,
    pub valor_total: Decimal,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(default)]
    pub prontuario: Option<MedicalRecord>,
}

impl Appointment {
    /// A clinic can write the record once the visit is confirmed and no
    /// record exists yet
    pub fn can_record_attendance(&self) -> bool {
        self.status == AppointmentStatus::Confirmado && self.prontuario.is_none()
    }

    pub fn is_on(&self, day: chrono::NaiveDate) -> bool {
        self.data_hora.date() == day
    }
}
