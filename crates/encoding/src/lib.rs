//! ADB RSA public key encoding
//!
//! Turns an RSA public key into the 524-byte record an `adbd` verifier
//! consumes, together with the precomputed Montgomery constants it needs,
//! and into the `<base64> <identity>` line stored in `adb_keys` or shown
//! during pairing.
//!
//! ```
//! use adbkey_encoding::{binary, text};
//! use num_bigint::BigUint;
//!
//! let modulus = (BigUint::from(1u32) << 2047u32) + 1u32;
//! let record = binary::encode(&modulus, 65537).unwrap();
//! assert_eq!(record.len(), 524);
//!
//! let line = text::encode_text(&record, "user@host");
//! assert!(line.ends_with(" user@host"));
//! ```

pub mod authorized;
pub mod binary;
pub mod error;
pub mod key;
pub mod layout;
pub mod montgomery;
pub mod text;

// Re-exports
pub use authorized::AuthorizedKeys;
pub use binary::{decode, decode_with_layout, encode, encode_key, encode_with_layout, KeyRecord};
pub use error::{Error, Result};
pub use key::RsaPublicKey;
pub use layout::KeyLayout;
pub use montgomery::MontgomeryParams;
pub use text::{encode_key_text, encode_text, pairing_payload, KeyLine};
