use async_trait::async_trait;

use super::CatalogSource;
use crate::error::FetchError;

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        tracing::debug!(url = %self.url, "fetching catalog");
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        tracing::debug!(bytes = body.len(), "catalog downloaded");
        Ok(body.to_vec())
    }
}
