use crate::modules::management::domain::BinarySource;
use crate::shared::config::AppEnvironment;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::http_handler::CommonHttpHandler;

/// Downloads asset binaries from their public URLs
pub struct HttpBinarySource {
    client: Client,
}

impl HttpBinarySource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_environment(environment: &AppEnvironment) -> AppResult<Self> {
        let client =
            CommonHttpHandler::create_http_client(environment.http_timeout, "template-manager/0.1")?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl BinarySource for HttpBinarySource {
    async fn fetch(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let response = CommonHttpHandler::ensure_success(response, "asset host").await?;
        let bytes = response.bytes().await?;
        debug!(url, size = bytes.len(), "downloaded asset binary");
        Ok(bytes.to_vec())
    }
}
