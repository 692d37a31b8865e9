//! Raw byte loading for image sources.

mod byte_loader;

pub use byte_loader::ByteLoader;
