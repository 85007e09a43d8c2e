//! Request Ticket Model (requisição)
//!
//! Generic work items managed by administrators.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pendente,
    EmAndamento,
    Concluida,
    Cancelada,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        Self::Pendente,
        Self::EmAndamento,
        Self::Concluida,
        Self::Cancelada,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::EmAndamento => "EM_ANDAMENTO",
            Self::Concluida => "CONCLUIDA",
            Self::Cancelada => "CANCELADA",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestPriority {
    Baixa,
    Media,
    Alta,
    Urgente,
}

impl RequestPriority {
    pub const ALL: [RequestPriority; 4] = [Self::Baixa, Self::Media, Self::Alta, Self::Urgente];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baixa => "BAIXA",
            Self::Media => "MEDIA",
            Self::Alta => "ALTA",
            Self::Urgente => "URGENTE",
        }
    }
}

impl fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create/update payload for `/requisicoes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTicketInput {
    pub titulo: String,
    pub descricao: String,
    pub status: RequestStatus,
    pub prioridade: RequestPriority,
    pub solicitante: String,
}

impl RequestTicketInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_required_text(&self.titulo, "titulo", validation::MAX_TITLE_LEN)?;
        validation::validate_required_text(&self.descricao, "descricao", validation::MAX_NOTE_LEN)?;
        validation::validate_required_text(
            &self.solicitante,
            "solicitante",
            validation::MAX_REQUESTER_LEN,
        )
    }
}

/// Request ticket as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestTicket {
    pub id: i64,
    pub titulo: String,
    pub descricao: String,
    pub status: RequestStatus,
    pub prioridade: RequestPriority,
    pub solicitante: String,
    #[serde(default)]
    pub data_criacao: Option<NaiveDateTime>,
    #[serde(default)]
    pub data_atualizacao: Option<NaiveDateTime>,
}
