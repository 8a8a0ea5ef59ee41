//! Shared domain types, configuration, and export helpers for bizscout.

mod app_config;
mod business;
mod config;
pub mod export;
mod search;

use thiserror::Error;

pub use app_config::{AppConfig, Capabilities};
pub use business::{is_http_url, notes, BusinessRecord};
pub use config::{load_app_config, load_app_config_from_env};
pub use search::{normalize_limit, SearchRequest, ValidationError, DEFAULT_LIMIT, MAX_LIMIT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
