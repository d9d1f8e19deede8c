//! Error type definitions for key encoding operations

use alloc::string::String;

/// Primary error type for adbkey operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The key cannot be represented or used
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for adbkey operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether the key itself is unusable, as opposed to malformed input
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                if message.is_empty() {
                    write!(f, "Invalid key: {}", context)
                } else {
                    write!(f, "Invalid key: {}: {}", context, message)
                }
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
        }
    }
}
