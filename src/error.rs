use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("status code -> {status}, server error message -> {message}")]
    Status { status: StatusCode, message: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("view count {0} cannot be incremented")]
    Overflow(i64),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(err)
        } else {
            UpstreamError::Transport(err)
        }
    }
}

impl UpstreamError {
    pub(crate) async fn from_response(response: reqwest::Response) -> UpstreamError {
        let status = response.status();
        let message = response.text().await.unwrap_or_else(|_| "none".to_string());
        UpstreamError::Status { status, message }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid UPSTREAM_TIMEOUT_SECS value {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),
}
