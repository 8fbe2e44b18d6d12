//! Error type definitions for digest operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for digest operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum Error {
    /// Invalid length error with context
    #[cfg_attr(
        feature = "std",
        error("{context}: invalid length (expected {expected}, got {actual})")
    )]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[cfg_attr(feature = "std", error("{context}: {message}"))]
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// An operation was issued against a hasher in the wrong lifecycle state
    #[cfg_attr(feature = "std", error("{algorithm}: cannot {operation} a finalized hasher"))]
    InvalidState {
        algorithm: &'static str,
        operation: &'static str,
    },

    /// Opening or reading an input source failed
    #[cfg(feature = "std")]
    #[error("I/O error in {context}: {message}")]
    Io {
        context: &'static str,
        kind: std::io::ErrorKind,
        message: String,
    },
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            Self::InvalidState {
                algorithm,
                operation,
            } => write!(f, "{}: cannot {} a finalized hasher", algorithm, operation),
        }
    }
}
