//! Console host: replies go to stdout and an output file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::entities::{AttachmentCapabilities, OutgoingImage};
use crate::domain::errors::ReplyError;
use crate::domain::ports::ReplyPort;

/// Reply port that prints text and writes images to a fixed path.
pub struct ConsoleReplyPort<W = Stdout> {
    output: PathBuf,
    writer: Mutex<W>,
}

impl ConsoleReplyPort {
    /// Creates a port printing to stdout and writing images to `output`.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_writer(output, tokio::io::stdout())
    }
}

impl<W> ConsoleReplyPort<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a port printing text replies to `writer`.
    pub fn with_writer(output: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            output: output.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns where image replies are written.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Consumes the port and returns the text writer.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> ReplyPort for ConsoleReplyPort<W>
where
    W: AsyncWrite + Unpin + Send,
{
    fn capabilities(&self) -> AttachmentCapabilities {
        AttachmentCapabilities::all()
    }

    async fn send_text(&self, text: &str) -> Result<(), ReplyError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }

    async fn send_image(&self, image: OutgoingImage) -> Result<(), ReplyError> {
        if self.output.as_os_str().is_empty() {
            return Err(ReplyError::rejected("no output path configured"));
        }

        let kind = image.kind();
        match image {
            OutgoingImage::Path(path) => {
                tokio::fs::copy(&path, &self.output).await?;
            }
            OutgoingImage::Bytes(bytes) => {
                tokio::fs::write(&self.output, &bytes).await?;
            }
        }

        info!(output = %self.output.display(), kind, "Image reply written");
        Ok(())
    }
}
