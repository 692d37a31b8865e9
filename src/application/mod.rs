//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Command parsing and image lookup.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{CommandResponse, CommandSettings};
pub use use_cases::SymmetryUseCase;
