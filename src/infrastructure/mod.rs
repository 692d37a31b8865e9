//! Infrastructure layer with host, loader and image adapters.

/// Application configuration.
pub mod config;
/// Console host adapters.
pub mod host;
/// Image decoding, encoding and temporary files.
pub mod image;
/// Byte loading from URLs, files and inline payloads.
pub mod loader;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use host::ConsoleReplyPort;
pub use image::{ImageCodec, TempImageFile};
pub use loader::ByteLoader;
