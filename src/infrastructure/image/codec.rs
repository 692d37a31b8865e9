//! Image decoding, mirroring and PNG encoding on the blocking pool.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use image::{ImageFormat, RgbaImage};
use tracing::trace;

use crate::domain::entities::SymmetryMode;
use crate::domain::errors::SymmetryError;
use crate::domain::services::SymmetryTransformer;

/// Decoded image, normalized to RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage(RgbaImage);

impl DecodedImage {
    /// Wraps an RGBA buffer.
    #[must_use]
    pub const fn from_rgba(image: RgbaImage) -> Self {
        Self(image)
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Returns the underlying RGBA buffer.
    #[must_use]
    pub const fn as_rgba(&self) -> &RgbaImage {
        &self.0
    }
}

/// CPU-bound image stages, each run via `spawn_blocking`.
pub struct ImageCodec;

impl ImageCodec {
    /// Whether the codec is compiled in.
    pub const AVAILABLE: bool = true;

    /// Decodes any supported format into RGBA8.
    ///
    /// # Errors
    /// Returns `SymmetryError::Decode` if the bytes are not a supported image.
    pub async fn decode(bytes: Bytes) -> Result<DecodedImage, SymmetryError> {
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| SymmetryError::decode(format!("Decode task panicked: {e}")))?
            .map_err(|e| SymmetryError::decode(format!("Failed to decode image: {e}")))?;

        trace!(
            width = decoded.width(),
            height = decoded.height(),
            color = ?decoded.color(),
            "Decoded image"
        );

        Ok(DecodedImage(decoded.to_rgba8()))
    }

    /// Applies the symmetry transform.
    ///
    /// # Errors
    /// Returns `SymmetryError::Processing` if the transform task fails.
    pub async fn mirror(
        image: DecodedImage,
        mode: SymmetryMode,
    ) -> Result<DecodedImage, SymmetryError> {
        tokio::task::spawn_blocking(move || SymmetryTransformer::apply(&image.0, mode))
            .await
            .map(DecodedImage)
            .map_err(|e| SymmetryError::processing(format!("Transform task failed: {e}")))
    }

    /// Encodes the image as PNG at `path`.
    ///
    /// # Errors
    /// Returns `SymmetryError::TempWrite` if encoding or writing fails.
    pub async fn write_png(image: DecodedImage, path: &Path) -> Result<(), SymmetryError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || image.0.save_with_format(&path, ImageFormat::Png))
            .await
            .map_err(|e| SymmetryError::temp_write(format!("Encode task panicked: {e}")))?
            .map_err(|e| SymmetryError::temp_write(format!("Failed to write PNG: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Bytes {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        Bytes::from(buf.into_inner())
    }

    #[tokio::test]
    async fn test_decode_normalizes_to_rgba() {
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([1, 2, 3]));
        let mut buf = Cursor::new(Vec::new());
        rgb.write_to(&mut buf, ImageFormat::Png).unwrap();

        let decoded = ImageCodec::decode(Bytes::from(buf.into_inner())).await.unwrap();

        assert_eq!((decoded.width(), decoded.height()), (3, 2));
        assert_eq!(decoded.as_rgba().get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
    }

    #[tokio::test]
    async fn test_decode_rejects_garbage() {
        let result = ImageCodec::decode(Bytes::from_static(b"not an image")).await;
        assert!(matches!(result, Err(SymmetryError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_mirror_and_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let source = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));

        let decoded = ImageCodec::decode(png_bytes(&source)).await.unwrap();
        let mirrored = ImageCodec::mirror(decoded, SymmetryMode::Center).await.unwrap();
        ImageCodec::write_png(mirrored, &path).await.unwrap();

        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written, source);
    }

    #[tokio::test]
    async fn test_write_png_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let image = DecodedImage::from_rgba(RgbaImage::new(2, 2));

        let result = ImageCodec::write_png(image, &path).await;
        assert!(matches!(result, Err(SymmetryError::TempWrite { .. })));
    }
}
