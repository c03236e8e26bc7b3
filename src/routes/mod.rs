pub mod common;
pub mod items;

pub use common::common_routes;
pub use items::item_routes;

use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: common routes, item API, and the static directory as fallback when configured.
pub fn app(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(item_routes(state, config.enable_reset, config.body_limit));
    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.layer(TraceLayer::new_for_http())
}
