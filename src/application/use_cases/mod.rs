//! Use case implementations.

mod symmetry_use_case;

pub use symmetry_use_case::SymmetryUseCase;
