//! Public API traits and types for the adbkey library
//!
//! This crate provides the public API surface shared by the adbkey crates:
//! the library-wide error type and the traits at the seams toward key
//! providers and byte serialization.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{PublicKeyParts, Serialize};

// Re-export trait modules for direct access
pub use traits::{key, serialize};
