//! Error handling for key encoding operations

use adbkey_api::error::Error as CoreError;

/// Error type for key encoding operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Modulus needs more words than the layout provides
    #[error("modulus is {bits} bits wide, the record holds at most {max_bits}")]
    ModulusTooWide {
        bits: u64,
        max_bits: u64,
    },

    /// Public exponent does not fit the 32-bit exponent field
    #[error("public exponent is {bits} bits wide, the record holds at most 32")]
    ExponentTooWide {
        bits: u64,
    },

    /// Invalid key material
    #[error("invalid {key_type} key: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Unsupported word count or word size
    #[error("invalid key layout: {reason}")]
    InvalidLayout {
        reason: &'static str,
    },

    /// Input of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Structurally broken record or key line
    #[error("malformed {context}: {details}")]
    Malformed {
        context: &'static str,
        details: &'static str,
    },

    /// Key line payload is not valid Base64
    #[error("invalid base64 key payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// An `adb_keys` entry failed to parse or verify
    #[error("adb_keys line {line}: {source}")]
    AuthorizedKeys {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

/// Result type for key encoding operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether the caller handed in a key the record cannot represent.
    ///
    /// These are deterministic: retrying with the same input fails again.
    /// Everything else describes malformed encoded input.
    pub fn is_precondition_violation(&self) -> bool {
        match self {
            Error::ModulusTooWide { .. }
            | Error::ExponentTooWide { .. }
            | Error::InvalidKey { .. }
            | Error::InvalidLayout { .. } => true,
            Error::AuthorizedKeys { source, .. } => source.is_precondition_violation(),
            _ => false,
        }
    }
}

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::ModulusTooWide { .. } | Error::ExponentTooWide { .. } => CoreError::InvalidKey {
                context: "RSA public key",
                message: err.to_string(),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidLayout { reason } => CoreError::InvalidParameter {
                context: "key layout",
                message: reason.to_string(),
            },
            Error::InvalidLength { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Malformed { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
            Error::Base64(e) => CoreError::SerializationError {
                context: "adb key line",
                message: e.to_string(),
            },
            Error::AuthorizedKeys { .. } => CoreError::SerializationError {
                context: "adb_keys",
                message: err.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
