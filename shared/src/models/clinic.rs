//! Clinic Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Clinic listed on the marketplace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: i64,
    pub nome_fantasia: String,
    pub razao_social: String,
    pub especialidade: String,
    pub endereco: String,
    /// Average rating, absent until the first review
    #[serde(default)]
    pub avaliacao: Option<f64>,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default)]
    pub data_criacao: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

impl Clinic {
    /// Case-insensitive match on name or specialty, for the search box
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.nome_fantasia.to_lowercase().contains(&query)
            || self.especialidade.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> Clinic {
        serde_json::from_str(
            r#"{
                "id": 7,
                "nomeFantasia": "Clínica Sorriso",
                "razaoSocial": "Sorriso Odontologia LTDA",
                "especialidade": "Odontologia",
                "endereco": "Rua A, 100",
                "avaliacao": 4.5,
                "ativo": true,
                "dataCriacao": "2025-01-10T08:00:00"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse() {
        let c = clinic();
        assert_eq!(c.id, 7);
        assert_eq!(c.avaliacao, Some(4.5));
        assert!(c.data_criacao.is_some());
    }

    #[test]
    fn test_parse_without_rating() {
        let c: Clinic = serde_json::from_str(
            r#"{"id":1,"nomeFantasia":"A","razaoSocial":"B","especialidade":"C","endereco":"D","avaliacao":null}"#,
        )
        .unwrap();
        assert!(c.avaliacao.is_none());
        assert!(c.ativo);
    }

    #[test]
    fn test_matches() {
        let c = clinic();
        assert!(c.matches("sorriso"));
        assert!(c.matches("ODONTO"));
        assert!(c.matches(""));
        assert!(!c.matches("cardio"));
    }
}
