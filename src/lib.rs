//! World data: an in-memory REST backend for per-country statistics seeded from a delimited file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, ConfigError, LoadError, StoreError};
pub use loader::{load_seed, parse_seed};
pub use routes::{app, common_routes, item_routes};
pub use service::{MutationService, QueryService};
pub use state::AppState;
pub use store::{Record, RecordStore};
