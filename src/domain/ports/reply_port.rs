//! Port definition for replying through the host.

use async_trait::async_trait;

use crate::domain::entities::{AttachmentCapabilities, OutgoingImage};
use crate::domain::errors::ReplyError;

/// Port implemented by the host to deliver replies to the conversation.
#[async_trait]
pub trait ReplyPort: Send + Sync {
    /// Attachment constructors the host exposes.
    fn capabilities(&self) -> AttachmentCapabilities;

    /// Sends a plain text reply.
    async fn send_text(&self, text: &str) -> Result<(), ReplyError>;

    /// Sends an image reply.
    ///
    /// Path-based images are only guaranteed to exist until this call returns.
    async fn send_image(&self, image: OutgoingImage) -> Result<(), ReplyError>;
}
