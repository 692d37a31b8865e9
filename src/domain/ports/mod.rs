//! Port definitions for collaborators owned by the host.

mod byte_loader_port;
mod reply_port;

pub use byte_loader_port::ByteLoaderPort;
pub use reply_port::ReplyPort;
