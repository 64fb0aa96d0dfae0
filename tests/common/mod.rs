#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};
use std::time::Duration;

use portfolio_stats_relay::config::{CounterConfig, StatsConfig};
use portfolio_stats_relay::counter::CounterApi;
use portfolio_stats_relay::stats::LeetcodeStats;
use portfolio_stats_relay::{build_router, AppState};

pub const TOKEN: &str = "test-token";

pub fn counter_config(base_url: &str, api_key: Option<&str>) -> CounterConfig {
    CounterConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        timeout: Duration::from_millis(500),
    }
}

pub fn stats_config(url: &str) -> StatsConfig {
    StatsConfig {
        url: url.to_string(),
        timeout: Duration::from_millis(500),
    }
}

pub fn state(counter: CounterConfig, stats: StatsConfig) -> AppState {
    AppState::new(
        CounterApi::new(&counter).unwrap(),
        LeetcodeStats::new(&stats).unwrap(),
    )
}

pub fn spawn_app(state: AppState) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(build_router(state).into_make_service());
    tokio::spawn(server);

    addr
}

// accepts connections, never answers
pub async fn spawn_silent_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}", addr)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

pub async fn get_json(addr: SocketAddr, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = client()
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}
