use axum::routing::{get, head};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use super::handler;
use super::state::AppState;

// `*` is rejected alongside credentials, so request values are mirrored
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", head(handler::health_check_handler))
        .route("/get_views", get(handler::get_views))
        .route("/get_leetcode_stats", get(handler::get_leetcode_stats))
        .layer(cors_layer())
        .with_state(state)
}
