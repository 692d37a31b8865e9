//! Symmetry command use case implementation.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::application::dto::{CommandResponse, CommandSettings};
use crate::application::services::{ArgumentParser, ImageLocator};
use crate::domain::entities::{AttachmentCapabilities, Message, OutgoingImage, SymmetryMode};
use crate::domain::errors::SymmetryError;
use crate::domain::ports::{ByteLoaderPort, ReplyPort};
use crate::infrastructure::image::{ImageCodec, TempImageFile};

/// Handles one invocation of the symmetry command.
///
/// Stages run in order and stop at the first failure:
/// arguments, image lookup, decode, transform, encode, send. The temporary
/// PNG is removed on every path.
#[derive(Clone)]
pub struct SymmetryUseCase {
    settings: CommandSettings,
    locator: ImageLocator,
}

impl SymmetryUseCase {
    /// Creates new symmetry use case.
    #[must_use]
    pub fn new(settings: CommandSettings, loader: Arc<dyn ByteLoaderPort>) -> Self {
        let locator = ImageLocator::new(loader, settings.fetch_timeout);
        Self { settings, locator }
    }

    /// Executes the command for `message`, replying through `reply`.
    ///
    /// Failures have already been reported to the user when this returns.
    ///
    /// # Errors
    /// Returns the failure category for logging and tests.
    pub async fn execute(
        &self,
        message: &Message,
        reply: &dyn ReplyPort,
    ) -> Result<CommandResponse, SymmetryError> {
        let result = self.run(message, reply).await;

        match &result {
            Ok(response) => {
                info!(
                    mode = %response.mode,
                    width = response.width,
                    height = response.height,
                    "Symmetry image sent"
                );
            }
            Err(e) => {
                if e.is_input_error() {
                    debug!(error = %e, "Symmetry command rejected");
                } else {
                    tracing::error!(error = %e, "Symmetry command failed");
                }
                if let Err(send_err) = reply.send_text(&e.user_message()).await {
                    warn!(error = %send_err, "Failed to send error reply");
                }
            }
        }

        result
    }

    async fn run(
        &self,
        message: &Message,
        reply: &dyn ReplyPort,
    ) -> Result<CommandResponse, SymmetryError> {
        if let Some(missing) = self.settings.dependencies.first_missing() {
            return Err(SymmetryError::MissingDependency(missing));
        }

        let argument = ArgumentParser::extract(message, &self.settings.command).ok_or_else(|| {
            SymmetryError::MissingArgument {
                command: self.settings.command.clone(),
            }
        })?;

        let mode = SymmetryMode::from_token(&argument)
            .ok_or(SymmetryError::InvalidArgument { argument })?;
        debug!(%mode, "Parsed symmetry mode");

        let located = self
            .locator
            .locate(message)
            .await
            .ok_or(SymmetryError::ImageNotFound)?;

        let decoded = ImageCodec::decode(located.bytes).await?;
        debug!(
            width = decoded.width(),
            height = decoded.height(),
            quoted = located.quoted,
            "Decoded source image"
        );

        let mirrored = ImageCodec::mirror(decoded, mode).await?;
        let (width, height) = (mirrored.width(), mirrored.height());

        let temp = self
            .settings
            .temp_dir
            .as_deref()
            .map_or_else(TempImageFile::reserve_in_temp_dir, TempImageFile::reserve);
        ImageCodec::write_png(mirrored, temp.path()).await?;

        let outgoing = Self::build_attachment(reply.capabilities(), &temp).await?;
        debug!(kind = outgoing.kind(), "Sending symmetry image");
        reply.send_image(outgoing).await?;

        drop(temp);

        Ok(CommandResponse {
            mode,
            width,
            height,
        })
    }

    /// Prefers a path attachment, falling back to an in-memory one.
    async fn build_attachment(
        capabilities: AttachmentCapabilities,
        temp: &TempImageFile,
    ) -> Result<OutgoingImage, SymmetryError> {
        if capabilities.contains(AttachmentCapabilities::FROM_PATH) {
            return Ok(OutgoingImage::Path(temp.path().to_path_buf()));
        }

        if capabilities.contains(AttachmentCapabilities::FROM_BYTES) {
            let bytes = tokio::fs::read(temp.path()).await.map_err(|e| {
                SymmetryError::temp_write(format!("Failed to read back temporary image: {e}"))
            })?;
            return Ok(OutgoingImage::Bytes(Bytes::from(bytes)));
        }

        Err(SymmetryError::SendUnsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::DependencyStatus;
    use crate::domain::entities::{ImageSegment, Segment};
    use crate::domain::errors::Dependency;
    use crate::domain::ports::mocks::{MockByteLoaderPort, RecordingReplyPort};
    use std::path::Path;

    const ALL_DEPENDENCIES: DependencyStatus = DependencyStatus {
        image_codec: true,
        http_client: true,
    };

    fn use_case(temp_dir: &Path, loader: Arc<dyn ByteLoaderPort>) -> SymmetryUseCase {
        let settings = CommandSettings::new("sym")
            .with_temp_dir(temp_dir)
            .with_dependencies(ALL_DEPENDENCIES);
        SymmetryUseCase::new(settings, loader)
    }

    fn idle_loader() -> Arc<dyn ByteLoaderPort> {
        Arc::new(MockByteLoaderPort::new())
    }

    fn is_empty_dir(path: &Path) -> bool {
        std::fs::read_dir(path).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_missing_argument_replies_usage() {
        let dir = tempfile::tempdir().unwrap();
        let reply = RecordingReplyPort::new();
        let message = Message::new(vec![Segment::plain("/sym")]);

        let result = use_case(dir.path(), idle_loader()).execute(&message, &reply).await;

        assert!(matches!(result, Err(SymmetryError::MissingArgument { .. })));
        let texts = reply.texts().await;
        assert_eq!(texts.len(), 1);
        assert!(texts[0].starts_with("用法"));
        assert!(texts[0].contains("/sym"));
    }

    #[tokio::test]
    async fn test_invalid_argument_skips_image_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let reply = RecordingReplyPort::new();
        let message = Message::new(vec![
            Segment::plain("/sym diagonal"),
            Segment::image(ImageSegment::from_url("https://example.com/a.png")),
        ]);

        let result = use_case(dir.path(), idle_loader()).execute(&message, &reply).await;

        let err = tokio_test::assert_err!(result);
        assert!(matches!(err, SymmetryError::InvalidArgument { ref argument } if argument == "diagonal"));
        assert_eq!(reply.texts().await, vec![err.user_message()]);
        assert!(reply.images().await.is_empty());
    }

    #[tokio::test]
    async fn test_image_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reply = RecordingReplyPort::new();
        let message = Message::new(vec![Segment::plain("/sym lr")]);

        let result = use_case(dir.path(), idle_loader()).execute(&message, &reply).await;

        assert!(matches!(result, Err(SymmetryError::ImageNotFound)));
        assert!(reply.texts().await[0].starts_with("找不到图片"));
    }

    #[tokio::test]
    async fn test_missing_dependency_stops_early() {
        let dir = tempfile::tempdir().unwrap();
        let reply = RecordingReplyPort::new();
        let settings = CommandSettings::new("sym")
            .with_temp_dir(dir.path())
            .with_dependencies(DependencyStatus {
                image_codec: true,
                http_client: false,
            });
        let use_case = SymmetryUseCase::new(settings, idle_loader());
        let message = Message::new(vec![Segment::plain("/sym lr")]);

        let result = use_case.execute(&message, &reply).await;

        assert!(matches!(
            result,
            Err(SymmetryError::MissingDependency(Dependency::HttpClient))
        ));
        assert!(reply.texts().await[0].contains("HTTP"));
    }

    #[cfg(feature = "image")]
    mod pipeline {
        use super::*;
        use crate::domain::ports::mocks::Sent;
        use crate::infrastructure::loader::ByteLoader;
        use image::{ImageFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
        const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

        /// 10x10 square, red on the left half with a blue stripe in column 1.
        fn source_image() -> RgbaImage {
            RgbaImage::from_fn(10, 10, |x, _| if x == 1 { BLUE } else { RED })
        }

        fn png_bytes(image: &RgbaImage) -> Vec<u8> {
            let mut buf = Cursor::new(Vec::new());
            image.write_to(&mut buf, ImageFormat::Png).unwrap();
            buf.into_inner()
        }

        fn real_loader() -> Arc<dyn ByteLoaderPort> {
            Arc::new(ByteLoader::new())
        }

        #[tokio::test]
        async fn test_left_right_end_to_end_from_quoted_file() {
            let temp_dir = tempfile::tempdir().unwrap();
            let input_dir = tempfile::tempdir().unwrap();
            let input = input_dir.path().join("square.png");
            std::fs::write(&input, png_bytes(&source_image())).unwrap();

            let reply = RecordingReplyPort::new();
            let message = Message::new(vec![
                Segment::reply(vec![Segment::image(ImageSegment::from_file(
                    input.to_string_lossy(),
                ))]),
                Segment::plain("/sym lr"),
            ]);

            let result = use_case(temp_dir.path(), real_loader())
                .execute(&message, &reply)
                .await;

            let response = tokio_test::assert_ok!(result);
            assert_eq!(response.mode, SymmetryMode::LeftRight);
            assert_eq!((response.width, response.height), (10, 10));

            let images = reply.images().await;
            assert_eq!(images.len(), 1);
            let (path, bytes) = &images[0];
            assert_eq!(path.as_deref().and_then(Path::parent), Some(temp_dir.path()));

            let output = image::load_from_memory(bytes).unwrap().to_rgba8();
            assert_eq!(output.dimensions(), (10, 10));
            for y in 0..10 {
                for x in 0..5 {
                    assert_eq!(output.get_pixel(x, y), source_image().get_pixel(x, y));
                    assert_eq!(output.get_pixel(9 - x, y), source_image().get_pixel(x, y));
                }
            }
            assert_eq!(output.get_pixel(8, 0), &BLUE);

            assert!(reply.texts().await.is_empty());
            assert!(is_empty_dir(temp_dir.path()));
        }

        #[tokio::test]
        async fn test_bytes_attachment_when_paths_unsupported() {
            let temp_dir = tempfile::tempdir().unwrap();
            let reply = RecordingReplyPort::with_capabilities(AttachmentCapabilities::FROM_BYTES);
            let message = Message::new(vec![
                Segment::plain("/sym 中心"),
                Segment::image(ImageSegment::from_bytes(png_bytes(&source_image()))),
            ]);

            let result = use_case(temp_dir.path(), idle_loader())
                .execute(&message, &reply)
                .await;

            assert!(result.is_ok());
            let sent = reply.sent().await;
            assert!(matches!(&sent[..], [Sent::Image { path: None, .. }]));
            assert!(is_empty_dir(temp_dir.path()));
        }

        #[tokio::test]
        async fn test_unsupported_attachment_cleans_up() {
            let temp_dir = tempfile::tempdir().unwrap();
            let reply = RecordingReplyPort::with_capabilities(AttachmentCapabilities::empty());
            let message = Message::new(vec![
                Segment::plain("/sym ud"),
                Segment::image(ImageSegment::from_bytes(png_bytes(&source_image()))),
            ]);

            let result = use_case(temp_dir.path(), idle_loader())
                .execute(&message, &reply)
                .await;

            assert!(matches!(result, Err(SymmetryError::SendUnsupported)));
            assert!(reply.texts().await[0].contains("不支持"));
            assert!(is_empty_dir(temp_dir.path()));
        }

        #[tokio::test]
        async fn test_send_failure_cleans_up() {
            let temp_dir = tempfile::tempdir().unwrap();
            let reply = RecordingReplyPort::new().failing_images();
            let message = Message::new(vec![
                Segment::plain("/sym lr"),
                Segment::image(ImageSegment::from_bytes(png_bytes(&source_image()))),
            ]);

            let result = use_case(temp_dir.path(), idle_loader())
                .execute(&message, &reply)
                .await;

            assert!(matches!(result, Err(SymmetryError::SendFailed(_))));
            assert_eq!(reply.texts().await, vec!["发送失败。".to_string()]);
            assert!(is_empty_dir(temp_dir.path()));
        }

        #[tokio::test]
        async fn test_undecodable_image() {
            let temp_dir = tempfile::tempdir().unwrap();
            let reply = RecordingReplyPort::new();
            let message = Message::new(vec![
                Segment::plain("/sym lr"),
                Segment::image(ImageSegment::from_bytes(&b"definitely not a png"[..])),
            ]);

            let result = use_case(temp_dir.path(), idle_loader())
                .execute(&message, &reply)
                .await;

            assert!(matches!(result, Err(SymmetryError::Decode { .. })));
            assert!(reply.texts().await[0].starts_with("打开图片失败"));
            assert!(is_empty_dir(temp_dir.path()));
        }

        #[tokio::test]
        async fn test_unwritable_temp_dir() {
            let temp_dir = tempfile::tempdir().unwrap();
            let missing = temp_dir.path().join("gone");
            let reply = RecordingReplyPort::new();
            let message = Message::new(vec![
                Segment::plain("/sym lr"),
                Segment::image(ImageSegment::from_bytes(png_bytes(&source_image()))),
            ]);

            let result = use_case(&missing, idle_loader()).execute(&message, &reply).await;

            assert!(matches!(result, Err(SymmetryError::TempWrite { .. })));
            assert_eq!(reply.texts().await, vec!["保存临时图片失败。".to_string()]);
            assert!(!missing.exists());
        }
    }
}
