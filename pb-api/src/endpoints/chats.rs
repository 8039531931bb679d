//! Chat endpoints.

use pb_core::error::PbResult;

use crate::client::ApiClient;

impl ApiClient {
    /// List chats.
    pub async fn list_chats(&self) -> PbResult<serde_json::Value> {
        self.get("/chats").await?.into_body()
    }

    /// Create a chat with the user at the given email address.
    pub async fn create_chat(&self, email: &str) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "email": email });
        self.post("/chats", &body).await?.into_body()
    }

    /// Update a chat's muted flag.
    pub async fn update_chat(&self, iden: &str, muted: bool) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "muted": muted });
        self.post(&format!("/chats/{iden}"), &body).await?.into_body()
    }

    /// Delete a chat. Returns true iff the API answered 200.
    pub async fn delete_chat(&self, iden: &str) -> PbResult<bool> {
        let resp = self.delete(&format!("/chats/{iden}")).await?;
        Ok(resp.is_success())
    }
}
