use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::{MagsyncError, Result};
use crate::fetcher::{body_is_not_found, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .gzip(true)
            .brotli(true)
            .user_agent("magsync/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        if body_is_not_found(&body) {
            return Err(MagsyncError::NotFound(url.to_string()));
        }

        Ok(body)
    }
}
