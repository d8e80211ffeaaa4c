//! Application configuration: TOML file with per-field defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
