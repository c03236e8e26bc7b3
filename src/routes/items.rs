//! Item API routes under /api.

use crate::handlers::{create, delete_last, list, properties, range, read, reset};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

/// Item routes. `POST /api/reset` is mounted only when `enable_reset` is set.
pub fn item_routes(state: AppState, enable_reset: bool, body_limit: usize) -> Router {
    let mut router = Router::new()
        .route("/api/items", get(list).post(create).delete(delete_last))
        .route("/api/items/:id", get(read))
        .route("/api/items/:id1/:id2", get(range))
        .route("/api/properties", get(properties));
    if enable_reset {
        router = router.route("/api/reset", post(reset));
    }
    router
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}
