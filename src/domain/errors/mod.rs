//! Domain error types.

mod reply_error;
mod symmetry_error;

pub use reply_error::ReplyError;
pub use symmetry_error::{Dependency, SymmetryError};
