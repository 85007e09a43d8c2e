//! Rating Model (avaliação)

use serde::{Deserialize, Serialize};

use crate::validation::{self, MAX_RATING, MIN_RATING, ValidationError};

/// Payload of `POST /avaliacoes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    pub nota: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comentario: Option<String>,
    pub agendamento_id: i64,
}

impl RatingRequest {
    pub fn new(agendamento_id: i64, nota: u8) -> Self {
        Self {
            nota,
            comentario: None,
            agendamento_id,
        }
    }

    pub fn with_comment(mut self, comentario: impl Into<String>) -> Self {
        let comentario = comentario.into();
        self.comentario = (!comentario.trim().is_empty()).then_some(comentario);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.nota) {
            return Err(ValidationError::new(
                "nota",
                format!("A nota deve estar entre {MIN_RATING} e {MAX_RATING}"),
            ));
        }
        validation::validate_optional_text(&self.comentario, "comentario", validation::MAX_NOTE_LEN)
    }
}
