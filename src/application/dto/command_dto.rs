//! Symmetry command DTOs.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::SymmetryMode;
use crate::domain::errors::Dependency;
use crate::infrastructure::image::ImageCodec;

/// Default command token.
pub const DEFAULT_COMMAND: &str = "sym";

/// Default timeout for remote image downloads.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Which optional dependencies were compiled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyStatus {
    /// Image decoding/encoding.
    pub image_codec: bool,
    /// Remote downloads.
    pub http_client: bool,
}

impl DependencyStatus {
    /// Detects dependencies from enabled crate features.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            image_codec: ImageCodec::AVAILABLE,
            http_client: cfg!(feature = "http"),
        }
    }

    /// Returns the first missing dependency, image codec first.
    #[must_use]
    pub const fn first_missing(&self) -> Option<Dependency> {
        if !self.image_codec {
            Some(Dependency::ImageCodec)
        } else if !self.http_client {
            Some(Dependency::HttpClient)
        } else {
            None
        }
    }
}

impl Default for DependencyStatus {
    fn default() -> Self {
        Self::detect()
    }
}

/// Settings for the symmetry command handler.
#[derive(Debug, Clone)]
pub struct CommandSettings {
    /// Command token, without prefix.
    pub command: String,
    /// Timeout for each remote download.
    pub fetch_timeout: Duration,
    /// Directory for the temporary PNG; system temp dir when unset.
    pub temp_dir: Option<PathBuf>,
    /// Available optional dependencies.
    pub dependencies: DependencyStatus,
}

impl CommandSettings {
    /// Creates settings for the given command token.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            temp_dir: None,
            dependencies: DependencyStatus::detect(),
        }
    }

    /// Sets the download timeout.
    #[must_use]
    pub const fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Sets the temporary directory.
    #[must_use]
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Overrides dependency detection.
    #[must_use]
    pub const fn with_dependencies(mut self, dependencies: DependencyStatus) -> Self {
        self.dependencies = dependencies;
        self
    }
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

/// Successful command result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResponse {
    /// Applied mode.
    pub mode: SymmetryMode,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}
