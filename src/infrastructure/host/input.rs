//! Builds the incoming message for the console host.

use std::path::Path;

use thiserror::Error;

use crate::domain::entities::{ImageSegment, Message, Segment};
use crate::infrastructure::loader::ByteLoader;

/// Failure reading a message file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read message file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid message.
    #[error("invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a JSON-encoded message from `path`.
///
/// # Errors
///
/// Returns `InputError` if the file cannot be read or parsed.
pub async fn read_message(path: &Path) -> Result<Message, InputError> {
    let content = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&content)?)
}

/// Builds a message from command-line parts.
///
/// `quotes` become image segments of a quoted message, placed first.
#[must_use]
pub fn compose_message(text: &[String], images: &[String], quotes: &[String]) -> Message {
    let mut message = Message::default();

    if !quotes.is_empty() {
        message = message.with_segment(Segment::reply(
            quotes.iter().map(|src| image_segment(src)).collect(),
        ));
    }

    let text = text.join(" ");
    if !text.trim().is_empty() {
        message = message.with_segment(Segment::plain(text));
    }

    images
        .iter()
        .fold(message, |message, src| message.with_segment(image_segment(src)))
}

fn image_segment(source: &str) -> Segment {
    let image = if ByteLoader::is_remote(source) {
        ImageSegment::from_url(source)
    } else {
        ImageSegment::from_file(source)
    };
    Segment::image(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_compose_orders_quote_text_images() {
        let message = compose_message(
            &strings(&["/sym", "lr"]),
            &strings(&["https://example.com/a.png"]),
            &strings(&["/tmp/q.png"]),
        );

        let segments = message.segments();
        assert_eq!(segments.len(), 3);
        let quoted = segments[0].as_reply().unwrap();
        assert_eq!(quoted.chain()[0].as_image().unwrap().file(), Some("/tmp/q.png"));
        assert_eq!(segments[1].as_plain(), Some("/sym lr"));
        assert_eq!(
            segments[2].as_image().unwrap().url(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_compose_skips_blank_text() {
        let message = compose_message(&[], &strings(&["a.png"]), &[]);
        assert_eq!(message.segments().len(), 1);
        assert!(message.reply().is_none());
    }

    #[tokio::test]
    async fn test_read_message_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.json");
        std::fs::write(
            &path,
            r#"{"segments":[
                {"type":"reply","chain":[{"type":"image","data":"base64://aGk="}]},
                {"type":"plain","text":"/sym ud"}
            ]}"#,
        )
        .unwrap();

        let message = read_message(&path).await.unwrap();

        assert_eq!(message.plain_texts().collect::<Vec<_>>(), vec!["/sym ud"]);
        let quoted = message.reply().unwrap();
        assert_eq!(
            quoted.chain()[0].as_image().unwrap().data().map(|b| &b[..]),
            Some(&b"hi"[..])
        );
    }

    #[tokio::test]
    async fn test_read_message_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(read_message(&path).await, Err(InputError::Json(_))));
    }
}
