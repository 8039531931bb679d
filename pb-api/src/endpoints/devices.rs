//! Device endpoints.

use serde::Serialize;

use pb_core::error::{PbError, PbResult};

use crate::client::ApiClient;

/// Parameters for creating a device.
///
/// Every field is optional; unset fields are omitted from the request body
/// entirely (not sent as null) so the API applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sms: Option<bool>,
}

impl ApiClient {
    /// List devices.
    pub async fn list_devices(&self) -> PbResult<serde_json::Value> {
        self.get("/devices").await?.into_body()
    }

    /// Create a device.
    pub async fn create_device(&self, params: &DeviceParams) -> PbResult<serde_json::Value> {
        let body =
            serde_json::to_value(params).map_err(|e| PbError::Serialization(e.to_string()))?;
        self.post("/devices", &body).await?.into_body()
    }

    /// Update a device's muted flag.
    pub async fn update_device(&self, iden: &str, muted: bool) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "muted": muted });
        self.post(&format!("/devices/{iden}"), &body)
            .await?
            .into_body()
    }

    /// Delete a device. Returns true iff the API answered 200.
    pub async fn delete_device(&self, iden: &str) -> PbResult<bool> {
        let resp = self.delete(&format!("/devices/{iden}")).await?;
        Ok(resp.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_serialize_to_empty_object() {
        let json = serde_json::to_value(DeviceParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_set_fields_are_included_exactly() {
        let params = DeviceParams {
            nickname: Some("ci-box".into()),
            has_sms: Some(false),
            ..DeviceParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert_eq!(json["nickname"], "ci-box");
        assert_eq!(json["has_sms"], false);
    }

    #[test]
    fn test_unset_fields_are_not_null() {
        let params = DeviceParams {
            model: Some("rack-42".into()),
            ..DeviceParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert!(json.get("nickname").is_none());
        assert!(json.get("push_token").is_none());
    }
}
