//! Push endpoints.

use serde::Serialize;

use pb_core::error::{PbError, PbResult};

use crate::client::ApiClient;

/// Parameters for creating a push.
///
/// Target device, push type, and body are required; the rest are omitted
/// from the request body when unset.
#[derive(Debug, Clone, Serialize)]
pub struct PushParams {
    /// Identifier of the target device, sent as `device_iden`.
    #[serde(rename = "device_iden")]
    pub device: String,
    /// Push type: "note", "link", or "file".
    #[serde(rename = "type")]
    pub push_type: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl PushParams {
    /// Create push parameters from the required fields.
    pub fn new(
        device: impl Into<String>,
        push_type: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            device: device.into(),
            push_type: push_type.into(),
            body: body.into(),
            title: None,
            url: None,
            file_name: None,
            file_type: None,
            file_url: None,
        }
    }
}

impl ApiClient {
    /// List pushes.
    pub async fn list_pushes(&self) -> PbResult<serde_json::Value> {
        self.get("/pushes").await?.into_body()
    }

    /// Create a push.
    pub async fn create_push(&self, params: &PushParams) -> PbResult<serde_json::Value> {
        let body =
            serde_json::to_value(params).map_err(|e| PbError::Serialization(e.to_string()))?;
        self.post("/pushes", &body).await?.into_body()
    }

    /// Update a push's dismissed flag.
    pub async fn update_push(&self, iden: &str, dismissed: bool) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "dismissed": dismissed });
        self.post(&format!("/pushes/{iden}"), &body)
            .await?
            .into_body()
    }

    /// Delete a push. Returns true iff the API answered 200.
    pub async fn delete_push(&self, iden: &str) -> PbResult<bool> {
        let resp = self.delete(&format!("/pushes/{iden}")).await?;
        Ok(resp.is_success())
    }

    /// Delete all pushes belonging to the current user.
    /// Targets the collection endpoint; same boolean-from-status rule.
    pub async fn delete_all_pushes(&self) -> PbResult<bool> {
        let resp = self.delete("/pushes").await?;
        Ok(resp.is_success())
    }
}
