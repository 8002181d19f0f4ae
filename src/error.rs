//! Error types for the Gridpad binary.

use std::path::PathBuf;

use thiserror::Error;

/// Problems reading or validating the configuration file.
///
/// These never stop the application; they are reported as warnings and the
/// defaults are used instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Refusing to read {path}: file too large ({size} bytes, max {max})")]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Bad command-line input.
#[derive(Error, Debug, PartialEq)]
pub enum ArgError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    Unexpected(String),

    #[error("Invalid cell: {0}")]
    InvalidCell(String),

    #[error("Expected CELL=TEXT, got: {0}")]
    InvalidAssignment(String),
}
