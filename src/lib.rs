//! # adbkey
//!
//! Encoding of RSA public keys for Android Debug Bridge host authentication.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! adbkey = "0.1"
//! ```
//!
//! ```
//! use adbkey::prelude::*;
//! use num_bigint::BigUint;
//!
//! let modulus = (BigUint::from(1u32) << 2047u32) + 1u32;
//! let line = encode_key_text(&modulus, 65537, "user@host").unwrap();
//!
//! let parsed: KeyLine = line.parse().unwrap();
//! assert_eq!(parsed.identity(), "user@host");
//! assert_eq!(parsed.decode().unwrap().modulus(), modulus);
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for the core error type
//! - `serde`: serde derives for [`encoding::KeyLayout`] and [`encoding::KeyLine`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`adbkey-api`]: Core error type and key traits
//! - [`adbkey-encoding`]: Binary record, text line and `adb_keys` handling
//! - [`adbkey-params`]: Record layout constants
//! - [`adbkey-internal`]: Byte-order helpers

#![cfg_attr(not(feature = "std"), no_std)]

pub use adbkey_api as api;
pub use adbkey_encoding as encoding;
pub use adbkey_internal as internal;
pub use adbkey_params as params;

/// Common imports for adbkey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{PublicKeyParts, Serialize};

    pub use crate::encoding::{
        decode, encode, encode_key, encode_key_text, encode_text, pairing_payload, AuthorizedKeys,
        KeyLayout, KeyLine, KeyRecord, RsaPublicKey,
    };
}
