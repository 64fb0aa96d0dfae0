use std::time::Duration;

use anyhow::Error;
use axum::async_trait;
use serde_json::Value;

use crate::config::StatsConfig;
use crate::error::UpstreamError;

#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn solved(&self) -> Result<Value, UpstreamError>;
}

pub struct LeetcodeStats {
    client: reqwest::Client,
    url: String,
}

impl LeetcodeStats {
    pub fn new(config: &StatsConfig) -> Result<LeetcodeStats, Error> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(120))
            .timeout(config.timeout)
            .build()?;

        Ok(LeetcodeStats {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl StatsSource for LeetcodeStats {
    async fn solved(&self) -> Result<Value, UpstreamError> {
        tracing::info!("fetching coding stats from {}", self.url);
        let response = self.client.get(self.url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }

        // passed through as-is, no schema checks
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
