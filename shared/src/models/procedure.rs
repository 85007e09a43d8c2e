//! Procedure Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bookable procedure offered by a clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub preco: Decimal,
    pub duracao_estimada_minutos: u32,
    #[serde(default = "default_true")]
    pub disponivel: bool,
    #[serde(default)]
    pub clinica_id: Option<i64>,
    #[serde(default)]
    pub clinica_nome_fantasia: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Total price of the procedures whose ids are selected
pub fn total_price(procedures: &[Procedure], selected: &[i64]) -> Decimal {
    procedures
        .iter()
        .filter(|p| selected.contains(&p.id))
        .map(|p| p.preco)
        .sum()
}

/// Total estimated duration, in minutes, of the selected procedures
pub fn total_duration(procedures: &[Procedure], selected: &[i64]) -> u32 {
    procedures
        .iter()
        .filter(|p| selected.contains(&p.id))
        .map(|p| p.duracao_estimada_minutos)
        .sum()
}
