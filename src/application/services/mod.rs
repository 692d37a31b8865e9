//! Application services for the symmetry command.

mod argument_parser;
mod image_locator;

pub use argument_parser::ArgumentParser;
pub use image_locator::{Extractor, ImageLocator, LocatedImage};
