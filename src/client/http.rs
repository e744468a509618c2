use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{extract_value, ResultClient};
use crate::error::{QuizError, QuizResult};
use crate::quiz::LookupKey;
use crate::utils::{preview, DEFAULT_PREVIEW_BYTES};

/// `ResultClient` backed by a shared reqwest connection pool.
#[derive(Debug, Clone)]
pub struct HttpResultClient {
    client: Client,
}

impl HttpResultClient {
    pub fn new(timeout: Duration) -> QuizResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("luscher/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuizError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResultClient for HttpResultClient {
    async fn fetch(&self, endpoint: &str, key: &LookupKey) -> QuizResult<String> {
        debug!("GET {}?key={}", endpoint, key);

        let response = self
            .client
            .get(endpoint)
            .query(&[("key", key.to_string())])
            .send()
            .await
            .map_err(|e| {
                warn!("Lookup for {} failed: {}", key, e);
                QuizError::from(e)
            })?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("Lookup {} answered: {}", key, preview(&body, DEFAULT_PREVIEW_BYTES));

        Ok(extract_value(&body))
    }
}
