use crate::domain::ports::AtisSource;
use crate::utils::error::{AtisError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Fetches the ATIS status page over HTTP with a request timeout.
pub struct HttpAtisSource {
    client: Client,
    url: String,
}

impl HttpAtisSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl AtisSource for HttpAtisSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Requesting ATIS page from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        tracing::debug!("Upstream response status: {}", status);

        if status != StatusCode::OK {
            return Err(AtisError::UpstreamUnavailable {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
