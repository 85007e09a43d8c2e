use shared::models::RatingRequest;

use crate::{ClientResult, VitalisClient};

impl VitalisClient {
    /// Rate a completed appointment
    pub async fn rate_appointment(&self, request: &RatingRequest) -> ClientResult<()> {
        request.validate()?;
        self.http.post_unit("avaliacoes", request).await
    }
}
