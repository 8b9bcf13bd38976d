//! HTTP Config API
//!
//! reqwest-backed implementation of the [`ConfigApi`] port, talking to the
//! server's admin REST endpoints with bearer-token auth. Updates post
//! `{ "value": ... }` bodies; rejections carry a `message` the controllers
//! surface in their error banners.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::constants::API_TIMEOUT_SECS;
use crate::domain::{S3StorageConfig, ServerConfig};
use crate::error::{Error, Result};
use crate::services::config_api::{BlocklistUpdate, ConfigApi, paths};

/// Body shape of every admin config mutation response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigUpdateResponse {
    success: bool,
    message: Option<String>,
    forbidden_usernames: Option<Vec<String>>,
}

/// HTTP client for the admin API. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpConfigApi {
    base_url: Url,
    token: String,
    client: reqwest::Client,
}

impl HttpConfigApi {
    /// Create a client for the server at `base_url`, authenticating every
    /// request with `token`
    pub fn new(base_url: Url, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url,
            token: token.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| Error::Invalid {
            message: format!("Bad API path {path}: {e}"),
        })
    }

    /// POST `{ "value": value }` to an admin endpoint and decode the
    /// standard mutation response
    async fn post_value(&self, path: &str, value: Value) -> Result<ConfigUpdateResponse> {
        let request_id = Uuid::new_v4();
        let url = self.endpoint(path)?;
        tracing::debug!(%request_id, %url, "posting config update");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "value": value }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies usually still carry a message; fall back to the
            // HTTP status when they don't decode
            let payload: ConfigUpdateResponse = response.json().await.unwrap_or_default();
            let message = payload
                .message
                .unwrap_or_else(|| format!("server returned {status}"));
            tracing::warn!(%request_id, %status, "config update rejected");
            return Err(Error::Remote { message });
        }

        let payload: ConfigUpdateResponse = response.json().await?;
        if !payload.success {
            let message = payload
                .message
                .unwrap_or_else(|| "update was not applied".to_string());
            return Err(Error::Remote { message });
        }

        Ok(payload)
    }
}

impl ConfigApi for HttpConfigApi {
    async fn fetch_config(&self) -> Result<ServerConfig> {
        let url = self.endpoint(paths::SERVER_CONFIG)?;
        tracing::debug!(%url, "fetching server config");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn update_field(&self, path: &str, value: Value) -> Result<()> {
        self.post_value(path, value).await?;
        Ok(())
    }

    async fn update_blocked_domains(&self, domains: &[String]) -> Result<BlocklistUpdate> {
        let payload = self
            .post_value(paths::FEDERATION_BLOCKED_DOMAINS, serde_json::json!(domains))
            .await?;

        Ok(BlocklistUpdate {
            forbidden_usernames: payload.forbidden_usernames,
        })
    }

    async fn update_storage(&self, storage: &S3StorageConfig) -> Result<()> {
        self.post_value(paths::STORAGE_S3, serde_json::to_value(storage)?)
            .await?;
        Ok(())
    }

    async fn send_outbox_message(&self, content: &str) -> Result<()> {
        self.post_value(paths::OUTBOX_SEND, Value::String(content.to_string()))
            .await?;
        Ok(())
    }
}
