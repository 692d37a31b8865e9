//! Application configuration.

pub mod app_config;
/// Command-line arguments.
pub mod args;
/// Config file loading.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, PluginConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
