//! Error handling for the digest engines

use core::fmt;

use mdhash_api::Error as CoreError;

/// The error type for digest operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Operation not allowed in the hasher's current lifecycle state
    InvalidState {
        /// Algorithm of the hasher
        algorithm: &'static str,
        /// Operation that was rejected
        operation: &'static str,
    },

    /// Input source could not be opened or read
    #[cfg(feature = "std")]
    Io {
        /// Stage of input handling that failed
        context: &'static str,
        /// Kind reported by the operating system
        kind: std::io::ErrorKind,
        /// Detailed error message
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create an InvalidState error
    pub fn invalid_state(algorithm: &'static str, operation: &'static str) -> Self {
        Error::InvalidState {
            algorithm,
            operation,
        }
    }

    /// Wrap an I/O error with the stage it happened in
    #[cfg(feature = "std")]
    pub fn io(context: &'static str, err: &std::io::Error) -> Self {
        Error::Io {
            context,
            kind: err.kind(),
            details: err.to_string(),
        }
    }
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidState {
                algorithm,
                operation,
            } => {
                write!(f, "Invalid state: cannot {} a finalized {} hasher", operation, algorithm)
            }
            #[cfg(feature = "std")]
            Error::Io {
                context, details, ..
            } => {
                write!(f, "I/O error during {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io("read", &err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InvalidState {
                algorithm,
                operation,
            } => CoreError::InvalidState {
                algorithm,
                operation,
            },
            #[cfg(feature = "std")]
            Error::Io {
                context,
                kind,
                details,
            } => CoreError::Io {
                context,
                kind,
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
