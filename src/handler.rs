use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::response::{StatsResponse, ViewCountResponse};
use super::state::AppState;

pub async fn health_check_handler() -> Response {
    StatusCode::OK.into_response()
}

pub async fn get_views(State(state): State<AppState>) -> Json<ViewCountResponse> {
    match state.counter.hit().await {
        Ok(count) => {
            tracing::info!("view registered, current views: {}", count);
            Json(ViewCountResponse { count })
        }
        Err(e) => {
            tracing::error!("failed to update view counter, reason: {}", e);
            Json(ViewCountResponse::failed())
        }
    }
}

pub async fn get_leetcode_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    match state.stats.solved().await {
        Ok(data) => {
            tracing::info!("coding stats fetched");
            Json(StatsResponse { data })
        }
        Err(e) => {
            tracing::error!("failed to fetch coding stats, reason: {}", e);
            Json(StatsResponse::failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::counter::ViewCounter;
    use crate::error::UpstreamError;
    use crate::stats::StatsSource;

    struct FixedCounter(Option<i64>);

    #[async_trait]
    impl ViewCounter for FixedCounter {
        async fn hit(&self) -> Result<i64, UpstreamError> {
            self.0.ok_or_else(|| UpstreamError::Status {
                status: StatusCode::UNAUTHORIZED,
                message: "missing token".to_string(),
            })
        }
    }

    struct FixedStats(Option<Value>);

    #[async_trait]
    impl StatsSource for FixedStats {
        async fn solved(&self) -> Result<Value, UpstreamError> {
            match &self.0 {
                Some(value) => Ok(value.clone()),
                None => Err(serde_json::from_str::<Value>("<html>").unwrap_err().into()),
            }
        }
    }

    fn state(count: Option<i64>, stats: Option<Value>) -> AppState {
        AppState::new(FixedCounter(count), FixedStats(stats))
    }

    #[tokio::test]
    async fn views_pass_through_count() {
        let Json(body) = get_views(State(state(Some(1023), None))).await;
        assert_eq!(body, ViewCountResponse { count: 1023 });
    }

    #[tokio::test]
    async fn views_fall_back_to_sentinel() {
        let Json(body) = get_views(State(state(None, None))).await;
        assert_eq!(body.count, -1);
    }

    #[tokio::test]
    async fn stats_wrap_upstream_body() {
        let upstream = json!({ "solvedProblem": 120, "easySolved": 60 });
        let Json(body) = get_leetcode_stats(State(state(None, Some(upstream.clone())))).await;
        assert_eq!(body.data, upstream);
    }

    #[tokio::test]
    async fn stats_fall_back_to_sentinel() {
        let Json(body) = get_leetcode_stats(State(state(None, None))).await;
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "data": { "totalSolved": "undefined" } })
        );
    }
}
