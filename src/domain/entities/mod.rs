//! Domain entity definitions.

mod attachment;
mod message;
mod symmetry_mode;

pub use attachment::{AttachmentCapabilities, OutgoingImage};
pub use message::{ImageSegment, Message, ReplySegment, Segment};
pub use symmetry_mode::{SymmetryMode, UnknownMode};
