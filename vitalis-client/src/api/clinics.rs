use serde::Serialize;
use shared::models::{Clinic, Procedure};

use crate::{ClientResult, VitalisClient};

#[derive(Serialize)]
struct ClinicQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    especialidade: Option<&'a str>,
}

impl VitalisClient {
    /// List clinics, optionally filtered by specialty
    pub async fn clinics(&self, especialidade: Option<&str>) -> ClientResult<Vec<Clinic>> {
        let query = ClinicQuery {
            especialidade: especialidade.filter(|s| !s.trim().is_empty()),
        };
        self.http.get_query("clinicas", &query).await
    }

    pub async fn clinic(&self, id: i64) -> ClientResult<Clinic> {
        self.http.get(&format!("clinicas/{id}")).await
    }

    /// Procedures offered by a clinic
    pub async fn clinic_procedures(&self, clinic_id: i64) -> ClientResult<Vec<Procedure>> {
        self.http
            .get(&format!("clinicas/{clinic_id}/procedimentos"))
            .await
    }
}
