//! Runtime configuration from environment variables (a `.env` file is honoured).

use crate::error::ConfigError;
use std::path::PathBuf;

pub const ENV_HOST: &str = "WORLD_DATA_HOST";
pub const ENV_PORT: &str = "WORLD_DATA_PORT";
pub const ENV_DATA_PATH: &str = "WORLD_DATA_PATH";
pub const ENV_STATIC_DIR: &str = "WORLD_DATA_STATIC_DIR";
pub const ENV_ENABLE_RESET: &str = "WORLD_DATA_ENABLE_RESET";
pub const ENV_BODY_LIMIT: &str = "WORLD_DATA_BODY_LIMIT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_PATH: &str = "data/world_data.csv";
const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Seed file, read once at startup.
    pub data_path: PathBuf,
    /// Directory served for non-API paths, if any.
    pub static_dir: Option<PathBuf>,
    /// Mounts `POST /api/reset`.
    pub enable_reset: bool,
    /// Max accepted request body in bytes.
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            static_dir: None,
            enable_reset: true,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or empty keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();
        if let Some(host) = get(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(path) = get(ENV_DATA_PATH) {
            config.data_path = PathBuf::from(path);
        }
        config.static_dir = get(ENV_STATIC_DIR).map(PathBuf::from);
        if let Some(flag) = get(ENV_ENABLE_RESET) {
            config.enable_reset = parse_bool(&flag).ok_or(ConfigError::InvalidValue {
                key: ENV_ENABLE_RESET,
                value: flag.clone(),
            })?;
        }
        if let Some(limit) = get(ENV_BODY_LIMIT) {
            config.body_limit = limit.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_BODY_LIMIT,
                value: limit.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
