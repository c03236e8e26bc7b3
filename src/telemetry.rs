//! Tracing subscriber setup shared by binaries.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "world_data=info,world_data_server=info,tower_http=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`] when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
