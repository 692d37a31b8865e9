//! Console host adapters.

mod console;
mod input;

pub use console::ConsoleReplyPort;
pub use input::{InputError, compose_message, read_message};
