//! Pure domain services.

#[cfg(feature = "image")]
mod symmetry_transformer;

#[cfg(feature = "image")]
pub use symmetry_transformer::SymmetryTransformer;
