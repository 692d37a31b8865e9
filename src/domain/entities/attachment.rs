use std::path::PathBuf;

use bitflags::bitflags;
use bytes::Bytes;

bitflags! {
    /// Ways the host can construct an outgoing image attachment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct AttachmentCapabilities: u8 {
        /// Attachment can be built from a local file path.
        const FROM_PATH = 1 << 0;
        /// Attachment can be built from an in-memory buffer.
        const FROM_BYTES = 1 << 1;
    }
}

/// Outgoing image handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutgoingImage {
    /// PNG file on local storage. Only valid for the duration of the send.
    Path(PathBuf),
    /// Encoded PNG bytes.
    Bytes(Bytes),
}

impl OutgoingImage {
    /// Returns a short label for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Bytes(_) => "bytes",
        }
    }
}
