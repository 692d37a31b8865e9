//! Image codec stand-in when the `image` feature is disabled.

use std::path::Path;

use bytes::Bytes;

use crate::domain::entities::SymmetryMode;
use crate::domain::errors::{Dependency, SymmetryError};

/// Stub `DecodedImage` when image feature is disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage;

impl DecodedImage {
    /// Always zero.
    #[must_use]
    pub const fn width(&self) -> u32 {
        0
    }

    /// Always zero.
    #[must_use]
    pub const fn height(&self) -> u32 {
        0
    }
}

/// Stub codec; every stage reports the missing dependency.
pub struct ImageCodec;

#[allow(clippy::unused_async)]
impl ImageCodec {
    /// Whether the codec is compiled in.
    pub const AVAILABLE: bool = false;

    /// # Errors
    /// Always returns `SymmetryError::MissingDependency`.
    pub async fn decode(_bytes: Bytes) -> Result<DecodedImage, SymmetryError> {
        Err(SymmetryError::MissingDependency(Dependency::ImageCodec))
    }

    /// # Errors
    /// Always returns `SymmetryError::MissingDependency`.
    pub async fn mirror(
        _image: DecodedImage,
        _mode: SymmetryMode,
    ) -> Result<DecodedImage, SymmetryError> {
        Err(SymmetryError::MissingDependency(Dependency::ImageCodec))
    }

    /// # Errors
    /// Always returns `SymmetryError::MissingDependency`.
    pub async fn write_png(_image: DecodedImage, _path: &Path) -> Result<(), SymmetryError> {
        Err(SymmetryError::MissingDependency(Dependency::ImageCodec))
    }
}
