//! Domain layer with message entities, error taxonomy and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Image transforms.
pub mod services;

pub use entities::{Message, Segment, SymmetryMode};
pub use errors::{ReplyError, SymmetryError};
pub use ports::{ByteLoaderPort, ReplyPort};
