//! Workers KV through the Cloudflare REST API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use super::KvStore;
use crate::{config::CloudflareKvConfig, error::StoreError};

pub struct CloudflareKvStore {
    client: Client,
    values_url: String,
    api_token: String,
}

impl CloudflareKvStore {
    pub fn new(config: CloudflareKvConfig) -> Self {
        let values_url = format!(
            "{}/accounts/{}/storage/kv/namespaces/{}/values",
            config.api_base.trim_end_matches('/'),
            config.account_id,
            config.namespace_id
        );

        Self {
            client: Client::new(),
            values_url,
            api_token: config.api_token,
        }
    }

    fn value_url(&self, key: &str) -> String {
        format!("{}/{}", self.values_url, urlencoding::encode(key))
    }
}

#[async_trait]
impl KvStore for CloudflareKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let response = self
            .client
            .get(self.value_url(key))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        Ok(Some(response.text().await?))
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.value_url(key))
            .bearer_auth(&self.api_token)
            .body(value.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(upstream_error(response).await);
        }

        Ok(())
    }
}

async fn upstream_error(response: Response) -> StoreError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    StoreError::Upstream {
        status: status.as_u16(),
        message,
    }
}
