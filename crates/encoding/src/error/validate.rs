//! Validation utilities for key encoding operations

use super::{Error, Result};

/// Validate key material
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate layout parameters
pub fn layout(condition: bool, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidLayout { reason });
    }
    Ok(())
}

/// Validate the structure of an encoded record or line
pub fn record(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Malformed { context, details });
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength { context, expected, actual });
    }
    Ok(())
}
