//! Subscription and channel endpoints.

use pb_core::error::PbResult;

use crate::client::ApiClient;

impl ApiClient {
    /// List subscriptions.
    pub async fn list_subscriptions(&self) -> PbResult<serde_json::Value> {
        self.get("/subscriptions").await?.into_body()
    }

    /// Subscribe to the channel with the given tag.
    pub async fn create_subscription(&self, tag: &str) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "channel_tag": tag });
        self.post("/subscriptions", &body).await?.into_body()
    }

    /// Update a subscription's muted flag.
    pub async fn update_subscription(
        &self,
        iden: &str,
        muted: bool,
    ) -> PbResult<serde_json::Value> {
        let body = serde_json::json!({ "muted": muted });
        self.post(&format!("/subscriptions/{iden}"), &body)
            .await?
            .into_body()
    }

    /// Delete a subscription. Returns true iff the API answered 200.
    pub async fn delete_subscription(&self, iden: &str) -> PbResult<bool> {
        let resp = self.delete(&format!("/subscriptions/{iden}")).await?;
        Ok(resp.is_success())
    }

    /// Look up public information about a channel by tag.
    ///
    /// `no_recent_pushes` asks the API to leave recent pushes out of the
    /// returned channel description.
    pub async fn channel_info(
        &self,
        tag: &str,
        no_recent_pushes: bool,
    ) -> PbResult<serde_json::Value> {
        let query = [
            ("tag", tag.to_string()),
            ("no-recent-pushes", no_recent_pushes.to_string()),
        ];
        self.get_with_query("/channel-info", &query)
            .await?
            .into_body()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_create_subscription_body_uses_channel_tag() {
        let body = serde_json::json!({ "channel_tag": "jblow" });
        assert!(body.get("tag").is_none());
        assert_eq!(body["channel_tag"], "jblow");
    }
}
