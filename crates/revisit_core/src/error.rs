//! Dispatch error types.
//!
//! A missing handler or a misrouted dispatch cannot be represented here: both
//! are rejected by the compiler. What remains are failures at the driver's
//! input boundary.

use thiserror::Error;

/// Errors that can occur while preparing or running a pass.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A variant name that does not belong to the closed element set.
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),

    /// An operation name with no registered operation.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Creates an unsupported variant error.
    pub fn unsupported_variant(name: impl Into<String>) -> Self {
        Self::UnsupportedVariant(name.into())
    }

    /// Creates an unknown operation error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
