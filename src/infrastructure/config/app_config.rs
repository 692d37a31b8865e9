//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::application::dto::{CommandSettings, DEFAULT_COMMAND, DEFAULT_FETCH_TIMEOUT};

const APP_NAME: &str = "oxisym";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Symmetry command configuration.
    #[serde(default)]
    pub plugin: PluginConfig,
}

/// Symmetry command configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Command token, without the `/` prefix.
    #[serde(default = "default_command")]
    pub command: String,

    /// Timeout for remote image downloads, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Directory for temporary output images. System temp dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            temp_dir: None,
        }
    }
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

const fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT.as_secs()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(command) = &args.command {
            self.plugin.command = command.trim_start_matches('/').to_string();
        }
        if let Some(timeout) = args.fetch_timeout {
            self.plugin.fetch_timeout_secs = timeout;
        }
        if let Some(temp_dir) = &args.temp_dir {
            self.plugin.temp_dir = Some(temp_dir.clone());
        }
    }

    /// Builds the command handler settings.
    #[must_use]
    pub fn to_command_settings(&self) -> CommandSettings {
        let settings = CommandSettings::new(self.plugin.command.as_str())
            .with_fetch_timeout(Duration::from_secs(self.plugin.fetch_timeout_secs));
        match &self.plugin.temp_dir {
            Some(dir) => settings.with_temp_dir(dir),
            None => settings,
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
