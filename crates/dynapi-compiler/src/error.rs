//! Compiler error types
//!
//! Every failure is fatal: a single invalid action aborts the whole
//! compilation, and each variant names the offending service and action so
//! the message can be surfaced to the operator as-is.

use dynapi_core::CoreError;
use thiserror::Error;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// Conflicting or duplicated explicit routing declarations
    #[error("Configuration conflict in '{service}.{action}': {detail}")]
    ConfigurationConflict {
        service: String,
        action: String,
        detail: String,
    },

    /// A resolved or overridden template violates the path separator rules
    #[error("Malformed route template '{template}' in '{service}.{action}': {detail}")]
    MalformedTemplate {
        service: String,
        action: String,
        template: String,
        detail: String,
    },

    /// A parameter cannot be assigned an unambiguous binding source
    #[error("Cannot bind parameter '{parameter}' in '{service}.{action}': {detail}")]
    UnboundParameter {
        service: String,
        action: String,
        parameter: String,
        detail: String,
    },

    /// The classifier cannot place a declared type and no override resolves it
    #[error("Unknown type '{type_name}' for parameter '{parameter}' in '{service}.{action}'")]
    UnknownType {
        service: String,
        action: String,
        parameter: String,
        type_name: String,
    },

    /// The options failed their structural sanity check
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] CoreError),
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
