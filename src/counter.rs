use std::time::Duration;

use anyhow::Error;
use axum::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::CounterConfig;
use crate::error::UpstreamError;

#[async_trait]
pub trait ViewCounter: Send + Sync {
    async fn hit(&self) -> Result<i64, UpstreamError>;
}

pub struct CounterApi {
    client: reqwest::Client,
    up_url: String,
}

impl CounterApi {
    pub fn new(config: &CounterConfig) -> Result<CounterApi, Error> {
        // bearer token on every request, when configured
        let mut headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let mut auth_header_value = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
            auth_header_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_header_value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(120))
            .timeout(config.timeout)
            .build()?;

        Ok(CounterApi {
            client,
            up_url: format!("{}/up", config.base_url.trim_end_matches('/')),
        })
    }
}

#[derive(Debug, PartialEq)]
struct UpCount(i64);

impl<'de> Deserialize<'de> for UpCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        let count = value
            .get("data")
            .and_then(|data| data.get("up_count"))
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "missing integer field data.up_count in {}",
                    value
                ))
            })?;

        Ok(UpCount(count))
    }
}

#[async_trait]
impl ViewCounter for CounterApi {
    async fn hit(&self) -> Result<i64, UpstreamError> {
        // the GET to /up is itself the increment
        let response = self.client.get(self.up_url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::from_response(response).await);
        }

        let body = response.text().await?;
        let UpCount(up_count) = serde_json::from_str(&body)?;

        up_count
            .checked_add(1)
            .ok_or(UpstreamError::Overflow(up_count))
    }
}
