use crate::{ClientResult, VitalisClient};

impl VitalisClient {
    /// Reset the backend to its demo data set
    ///
    /// Returns the backend's confirmation text.
    pub async fn seed_database(&self) -> ClientResult<String> {
        let message = self.http.post_text("admin/seed").await?;
        tracing::info!(%message, "Database seeded");
        Ok(message)
    }
}
