//! World data server: reads config from the environment, loads the seed file once, serves the item API.
//!
//! Run from repo root: `cargo run -p world-data-server`

use world_data::{app, load_seed, telemetry, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    telemetry::init_tracing();

    let seed = load_seed(&config.data_path).await?;
    let state = AppState::new(seed);
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        reset = config.enable_reset,
        static_dir = ?config.static_dir,
        "REST API server listening at http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
}
