//! Data transfer objects for the application layer.

mod command_dto;

pub use command_dto::{
    CommandResponse, CommandSettings, DEFAULT_COMMAND, DEFAULT_FETCH_TIMEOUT, DependencyStatus,
};
