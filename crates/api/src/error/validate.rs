//! Validation utilities shared by the adbkey crates

use super::{Error, Result};

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength { context, expected, actual });
    }
    Ok(())
}
