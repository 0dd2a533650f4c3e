//! Error types for DYNAPI Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
