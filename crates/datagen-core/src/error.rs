//! Error type for generation and modification.

use thiserror::Error;

/// Errors raised by generator and modifier operations.
///
/// Every variant is a programming error at the call site. Operations fail
/// before producing any output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatagenError {
    /// An argument is outside the domain the operation accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DatagenError {
    /// Shorthand for building an [`DatagenError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
