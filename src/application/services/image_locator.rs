//! Locates the first usable image in a message or its quoted message.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::domain::entities::{Message, Segment};
use crate::domain::ports::ByteLoaderPort;

/// Extraction strategy tried against a candidate segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Image URL attribute, fetched through the loader.
    Url,
    /// Image file attribute, fetched through the loader.
    File,
    /// Inline image data, used as-is.
    Inline,
    /// Textual rendering of the segment when it looks like a URL.
    Rendered,
}

impl Extractor {
    /// Strategies in priority order.
    pub const CHAIN: [Self; 4] = [Self::Url, Self::File, Self::Inline, Self::Rendered];
}

/// Image bytes together with where they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedImage {
    /// Raw, undecoded bytes.
    pub bytes: Bytes,
    /// Strategy that produced the bytes.
    pub extractor: Extractor,
    /// Whether the image came from the quoted message.
    pub quoted: bool,
}

/// Scans the quoted message first, then the message itself.
#[derive(Clone)]
pub struct ImageLocator {
    loader: Arc<dyn ByteLoaderPort>,
    timeout: Duration,
}

impl ImageLocator {
    /// Creates a locator fetching through `loader`.
    #[must_use]
    pub fn new(loader: Arc<dyn ByteLoaderPort>, timeout: Duration) -> Self {
        Self { loader, timeout }
    }

    /// Returns the first segment yielding non-empty bytes, if any.
    pub async fn locate(&self, message: &Message) -> Option<LocatedImage> {
        if let Some(reply) = message.reply() {
            trace!(segments = reply.chain().len(), "Scanning quoted message");
            if let Some(found) = self.scan(reply.chain(), true).await {
                return Some(found);
            }
        }

        self.scan(message.segments(), false).await
    }

    async fn scan(&self, segments: &[Segment], quoted: bool) -> Option<LocatedImage> {
        for segment in segments {
            if !quoted && segment.is_reply() {
                continue;
            }
            for extractor in Extractor::CHAIN {
                if let Some(bytes) = self.extract(extractor, segment).await {
                    debug!(?extractor, quoted, len = bytes.len(), "Located image");
                    return Some(LocatedImage {
                        bytes,
                        extractor,
                        quoted,
                    });
                }
            }
        }
        None
    }

    async fn extract(&self, extractor: Extractor, segment: &Segment) -> Option<Bytes> {
        let bytes = match extractor {
            Extractor::Url => self.fetch(segment.as_image()?.url()?).await,
            Extractor::File => self.fetch(segment.as_image()?.file()?).await,
            Extractor::Inline => segment.as_image()?.data().cloned(),
            Extractor::Rendered => {
                let rendered = segment.to_string();
                if !rendered.starts_with("http") {
                    return None;
                }
                if let Some(image) = segment.as_image()
                    && (image.url() == Some(rendered.as_str())
                        || image.file() == Some(rendered.as_str()))
                {
                    return None;
                }
                self.fetch(&rendered).await
            }
        };
        bytes.filter(|b| !b.is_empty())
    }

    async fn fetch(&self, source: &str) -> Option<Bytes> {
        let bytes = self.loader.load(source, self.timeout).await;
        if bytes.is_none() {
            trace!(source = %source, "Source unavailable");
        }
        bytes
    }
}
