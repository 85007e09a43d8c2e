use serde::Serialize;
use shared::models::{RequestPriority, RequestStatus, RequestTicket, RequestTicketInput};

use crate::{ClientResult, VitalisClient};

#[derive(Serialize)]
struct StatusQuery {
    status: RequestStatus,
}

impl VitalisClient {
    pub async fn create_request(&self, input: &RequestTicketInput) -> ClientResult<RequestTicket> {
        input.validate()?;
        self.http.post("requisicoes", input).await
    }

    pub async fn requests(&self) -> ClientResult<Vec<RequestTicket>> {
        self.http.get("requisicoes").await
    }

    pub async fn request(&self, id: i64) -> ClientResult<RequestTicket> {
        self.http.get(&format!("requisicoes/{id}")).await
    }

    pub async fn update_request(
        &self,
        id: i64,
        input: &RequestTicketInput,
    ) -> ClientResult<RequestTicket> {
        input.validate()?;
        self.http.put(&format!("requisicoes/{id}"), input).await
    }

    pub async fn update_request_status(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> ClientResult<RequestTicket> {
        self.http
            .patch_query(&format!("requisicoes/{id}/status"), &StatusQuery { status })
            .await
    }

    pub async fn delete_request(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("requisicoes/{id}")).await
    }

    pub async fn requests_by_status(&self, status: RequestStatus) -> ClientResult<Vec<RequestTicket>> {
        self.http.get(&format!("requisicoes/status/{status}")).await
    }

    pub async fn requests_by_priority(
        &self,
        priority: RequestPriority,
    ) -> ClientResult<Vec<RequestTicket>> {
        self.http
            .get(&format!("requisicoes/prioridade/{priority}"))
            .await
    }
}
