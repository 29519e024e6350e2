use crate::config::HttpConfig;
use crate::constants::is_remote_location;
use crate::error::{RankingError, Result};
use std::time::Duration;
use tracing::{debug, instrument};

/// Retrieves raw source text from either an HTTP(S) URL or a local file path.
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(http.timeout_seconds))
            .user_agent(http.user_agent.clone())
            .build()
            .map_err(|e| RankingError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, location: &str) -> Result<String> {
        if is_remote_location(location) {
            self.get(location).await
        } else {
            read_local(location).await
        }
    }

    async fn get(&self, url: &str) -> Result<String> {
        let unavailable = |reason: String| RankingError::SourceUnavailable {
            location: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP status {}", status.as_u16())));
        }

        let body = resp.text().await.map_err(|e| unavailable(e.to_string()))?;
        debug!(status = status.as_u16(), bytes = body.len(), "Fetched source");
        Ok(body)
    }
}

async fn read_local(path: &str) -> Result<String> {
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| RankingError::SourceUnavailable {
            location: path.to_string(),
            reason: e.to_string(),
        })?;
    debug!(bytes = body.len(), "Read local source");
    Ok(body)
}
