//! Image handling infrastructure.
//!
//! This module provides:
//! - Decoding to RGBA, symmetry transforms and PNG encoding off the async runtime
//! - Self-cleaning temporary output files

#[cfg(feature = "image")]
mod codec;
#[cfg(not(feature = "image"))]
mod codec_stub;
pub mod temp_file;

#[cfg(feature = "image")]
pub use codec::{DecodedImage, ImageCodec};
#[cfg(not(feature = "image"))]
pub use codec_stub::{DecodedImage, ImageCodec};
pub use temp_file::TempImageFile;
