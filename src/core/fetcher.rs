use crate::core::{Pokemon, RecordSource, Result};
use crate::utils::error::DexError;
use reqwest::Client;

/// Record lookup against the remote service: `GET {base}/{id}`. One request
/// per call, no timeout, no retry.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl RecordSource for HttpFetcher {
    async fn fetch(&self, id: u32) -> Result<Pokemon> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), id);
        tracing::debug!("Requesting record from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Record service response status: {}", status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(DexError::RequestError { body });
        }

        let record: Pokemon = serde_json::from_str(&body)?;
        Ok(record)
    }
}
