//! Error types for Gridpad core.

use thiserror::Error;

/// Errors that can occur while hosting a sheet.
#[derive(Error, Debug)]
pub enum GridpadError {
    #[error("No container with id {0:?}")]
    ContainerNotFound(String),

    #[error("No cell {0} in the grid")]
    InvalidCell(String),
}

pub type Result<T> = std::result::Result<T, GridpadError>;
