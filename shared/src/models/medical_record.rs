//! Medical Record Model (prontuário)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{self, ValidationError};

/// Record written by a clinic after attending an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub descricao_sintomas: String,
    pub diagnostico: String,
    pub prescricao_medica: String,
    #[serde(default)]
    pub data_registro: Option<NaiveDateTime>,
}

/// Payload of `POST /agendamentos/{id}/prontuario`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRequest {
    pub descricao_sintomas: String,
    pub diagnostico: String,
    pub prescricao_medica: String,
}

impl MedicalRecordRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required_text(
            &self.descricao_sintomas,
            "descricaoSintomas",
            validation::MAX_NOTE_LEN,
        )?;
        validation::validate_required_text(
            &self.diagnostico,
            "diagnostico",
            validation::MAX_NOTE_LEN,
        )?;
        validation::validate_required_text(
            &self.prescricao_medica,
            "prescricaoMedica",
            validation::MAX_NOTE_LEN,
        )
    }
}
