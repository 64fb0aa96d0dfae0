use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_COUNTER_URL: &str =
    "https://api.counterapi.dev/v2/muzamil-sulemans-team-1761/portfolio-views-1023";
pub const DEFAULT_STATS_URL: &str = "https://alfa-leetcode-api.onrender.com/muzamilsuleman/solved";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct CounterConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub production: bool,
    pub port: u16,
    pub counter: CounterConfig,
    pub stats: StatsConfig,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let production = is_production();

        let port = match env_var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let timeout = match env_var("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => DEFAULT_TIMEOUT,
        };

        let api_key = env_var("COUNTER_API_KEY");
        if api_key.is_none() {
            tracing::warn!("COUNTER_API_KEY is not set, counter requests will be unauthenticated");
        }

        Ok(Config {
            production,
            port,
            counter: CounterConfig {
                base_url: env_var("COUNTER_URL").unwrap_or_else(|| DEFAULT_COUNTER_URL.to_string()),
                api_key,
                timeout,
            },
            stats: StatsConfig {
                url: env_var("STATS_URL").unwrap_or_else(|| DEFAULT_STATS_URL.to_string()),
                timeout,
            },
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        match self.production {
            false => SocketAddr::from(([127, 0, 0, 1], self.port)),
            // fly.io and friends route over ipv6
            true => SocketAddr::from(([0u16; 8], self.port)),
        }
    }
}

pub fn is_production() -> bool {
    env_var("PRODUCTION").is_some()
}

// empty values are treated as unset
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
