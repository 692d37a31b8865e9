use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::base64_bytes;

/// Image segment as delivered by the host.
///
/// Which field is populated depends on the host and its protocol version,
/// so all of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ImageSegment {
    url: Option<String>,
    file: Option<String>,
    data: Option<Bytes>,
}

#[allow(missing_docs)]
impl ImageSegment {
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::default().with_url(url)
    }

    #[must_use]
    pub fn from_file(file: impl Into<String>) -> Self {
        Self::default().with_file(file)
    }

    #[must_use]
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::default().with_data(data)
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = Some(data.into());
        self
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref().filter(|s| !s.is_empty())
    }

    #[must_use]
    pub const fn data(&self) -> Option<&Bytes> {
        self.data.as_ref()
    }
}

/// Quoted message carried inside a reply segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ReplySegment {
    id: Option<String>,
    chain: Vec<Segment>,
}

#[allow(missing_docs)]
impl ReplySegment {
    #[must_use]
    pub fn new(chain: Vec<Segment>) -> Self {
        Self { id: None, chain }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn chain(&self) -> &[Segment] {
        &self.chain
    }
}

/// One element of a message chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "WireSegment", into = "WireSegment")]
pub enum Segment {
    /// Plain text.
    Plain {
        /// Text content.
        text: String,
    },
    /// Image reference.
    Image(ImageSegment),
    /// Quoted/replied-to message.
    Reply(ReplySegment),
    /// Any segment kind this plugin does not interpret (at, face, record...).
    Other {
        /// Host-side segment kind.
        kind: String,
        /// Host-provided textual rendering, if any.
        raw: Option<String>,
    },
}

/// Flat wire form of a segment, resolved into [`Segment`] once on ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct WireSegment {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "base64_bytes::option"
    )]
    data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chain: Option<Vec<Segment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
}

impl From<WireSegment> for Segment {
    fn from(wire: WireSegment) -> Self {
        match wire.kind.to_ascii_lowercase().as_str() {
            "plain" | "text" => Self::Plain {
                text: wire.text.unwrap_or_default(),
            },
            "image" => Self::Image(ImageSegment {
                url: wire.url,
                file: wire.file,
                data: wire.data,
            }),
            "reply" | "quote" => Self::Reply(ReplySegment {
                id: wire.id,
                chain: wire.chain.unwrap_or_default(),
            }),
            _ => Self::Other {
                kind: wire.kind,
                raw: wire.raw.or(wire.text),
            },
        }
    }
}

impl From<Segment> for WireSegment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Plain { text } => Self {
                kind: "plain".to_string(),
                text: Some(text),
                ..Self::default()
            },
            Segment::Image(image) => Self {
                kind: "image".to_string(),
                url: image.url,
                file: image.file,
                data: image.data,
                ..Self::default()
            },
            Segment::Reply(reply) => Self {
                kind: "reply".to_string(),
                id: reply.id,
                chain: Some(reply.chain),
                ..Self::default()
            },
            Segment::Other { kind, raw } => Self {
                kind,
                raw,
                ..Self::default()
            },
        }
    }
}

impl Segment {
    /// Creates a plain text segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// Creates an image segment.
    #[must_use]
    pub const fn image(image: ImageSegment) -> Self {
        Self::Image(image)
    }

    /// Creates a reply segment quoting `chain`.
    #[must_use]
    pub fn reply(chain: Vec<Self>) -> Self {
        Self::Reply(ReplySegment::new(chain))
    }

    /// Creates an uninterpreted segment.
    #[must_use]
    pub fn other(kind: impl Into<String>, raw: Option<String>) -> Self {
        Self::Other {
            kind: kind.into(),
            raw,
        }
    }

    /// Returns the text of a plain segment.
    #[must_use]
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain { text } => Some(text),
            _ => None,
        }
    }

    /// Returns the image payload of an image segment.
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageSegment> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }

    /// Returns the quoted message of a reply segment.
    #[must_use]
    pub const fn as_reply(&self) -> Option<&ReplySegment> {
        match self {
            Self::Reply(reply) => Some(reply),
            _ => None,
        }
    }

    /// Returns true for reply segments.
    #[must_use]
    pub const fn is_reply(&self) -> bool {
        matches!(self, Self::Reply(_))
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain { text } => write!(f, "{text}"),
            Self::Image(image) => match image.url().or_else(|| image.file()) {
                Some(location) => write!(f, "{location}"),
                None => write!(f, "[image]"),
            },
            Self::Reply(_) => write!(f, "[reply]"),
            Self::Other { kind, raw } => match raw {
                Some(raw) => write!(f, "{raw}"),
                None => write!(f, "[{kind}]"),
            },
        }
    }
}

/// Incoming message: an ordered chain of segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    #[serde(default)]
    segments: Vec<Segment>,
}

#[allow(missing_docs)]
impl Message {
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the first quoted message, if any.
    #[must_use]
    pub fn reply(&self) -> Option<&ReplySegment> {
        self.segments.iter().find_map(Segment::as_reply)
    }

    /// Iterates over plain text segments in order.
    pub fn plain_texts(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::as_plain)
    }
}

impl From<Vec<Segment>> for Message {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}
