//! Webhook endpoints.

use cz_core::error::CzResult;
use cz_models::Webhook;

use crate::client::ApiClient;

impl ApiClient {
    /// List all webhooks.
    pub async fn webhooks(&self) -> CzResult<Vec<Webhook>> {
        self.get_json("/webhooks").await
    }

    /// Register a webhook.
    pub async fn create_webhook(&self, webhook: &Webhook) -> CzResult<Webhook> {
        self.post_json("/webhooks", webhook).await
    }

    /// Update a webhook.
    pub async fn update_webhook(&self, webhook_id: &str, webhook: &Webhook) -> CzResult<Webhook> {
        self.put_json(&format!("/webhooks/{webhook_id}"), webhook).await
    }

    /// Delete a webhook.
    pub async fn delete_webhook(&self, webhook_id: &str) -> CzResult<()> {
        self.delete(&format!("/webhooks/{webhook_id}")).await
    }
}
