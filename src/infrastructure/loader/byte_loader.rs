//! Byte loader for URLs, local files and inline base64 payloads.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, trace};

use crate::domain::ports::ByteLoaderPort;
use crate::domain::serde_utils::base64_bytes;

#[cfg(feature = "http")]
const USER_AGENT: &str = concat!("oxisym/", env!("CARGO_PKG_VERSION"));

/// Loads raw bytes from HTTP(S) URLs or the local filesystem.
///
/// Every failure is logged and reported as `None`.
#[derive(Debug, Clone)]
pub struct ByteLoader {
    #[cfg(feature = "http")]
    http_client: Option<reqwest::Client>,
}

impl ByteLoader {
    /// Creates a loader with its own HTTP client.
    ///
    /// If the client cannot be built, remote sources are reported unavailable.
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "http")]
        {
            let http_client = match reqwest::Client::builder().user_agent(USER_AGENT).build() {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create HTTP client");
                    None
                }
            };
            Self { http_client }
        }

        #[cfg(not(feature = "http"))]
        {
            Self {}
        }
    }

    /// Returns true if `source` is an HTTP(S) URL.
    #[must_use]
    pub fn is_remote(source: &str) -> bool {
        source.starts_with("http://") || source.starts_with("https://")
    }

    #[cfg(feature = "http")]
    async fn fetch(&self, url: &str, timeout: Duration) -> Option<Bytes> {
        let client = self.http_client.as_ref()?;

        let response = match client.get(url).timeout(timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url = %url, error = %e, "Request failed");
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            debug!(url = %url, status = %response.status(), "Unexpected HTTP status");
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = %url, len = bytes.len(), "Downloaded bytes");
                Some(bytes)
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Failed to read body");
                None
            }
        }
    }

    #[cfg(not(feature = "http"))]
    #[allow(clippy::unused_async)]
    async fn fetch(&self, url: &str, _timeout: Duration) -> Option<Bytes> {
        debug!(url = %url, "HTTP support disabled, skipping remote source");
        None
    }

    async fn read_local(path: &Path) -> Option<Bytes> {
        match tokio::fs::try_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                trace!(path = %path.display(), "Local file does not exist");
                return None;
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to stat local file");
                return None;
            }
        }

        match tokio::fs::read(path).await {
            Ok(bytes) => Some(Bytes::from(bytes)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Failed to read local file");
                None
            }
        }
    }
}

impl Default for ByteLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ByteLoaderPort for ByteLoader {
    async fn load(&self, source: &str, timeout: Duration) -> Option<Bytes> {
        if source.is_empty() {
            return None;
        }

        if Self::is_remote(source) {
            return self.fetch(source, timeout).await;
        }

        if source.starts_with("base64://") {
            return match base64_bytes::decode(source) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    debug!(error = %e, "Invalid inline base64 payload");
                    None
                }
            };
        }

        let path = source.strip_prefix("file://").unwrap_or(source);
        Self::read_local(Path::new(path)).await
    }
}
