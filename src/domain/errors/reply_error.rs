//! Host reply error types.

use thiserror::Error;

/// Failure reported by the host while delivering a reply.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ReplyError {
    #[error("attachment rejected by host: {message}")]
    Rejected { message: String },

    #[error("io error while sending reply: {0}")]
    Io(#[from] std::io::Error),
}

impl ReplyError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
