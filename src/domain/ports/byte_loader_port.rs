//! Port definition for fetching raw bytes.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

/// Port for loading bytes from a URL or a local path.
///
/// Implementations never fail: any problem is reported as `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ByteLoaderPort: Send + Sync {
    /// Loads the bytes behind `source`, giving up after `timeout` for remote sources.
    async fn load(&self, source: &str, timeout: Duration) -> Option<Bytes>;
}
