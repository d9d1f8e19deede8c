//! Textual key form: `<base64 record> <identity>`
//!
//! This is the line `adb` writes to `adbkey.pub` and `adb_keys`, and the
//! string exchanged during pairing. The Base64 is the standard padded
//! alphabet without line breaks.

use core::fmt;
use core::str::FromStr;

use adbkey_params::adb::ADB_PAIRING_TERMINATOR;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use num_bigint::BigUint;

use crate::binary::{self, KeyRecord};
use crate::error::{validate, Error, Result};
use crate::key::RsaPublicKey;

/// Base64 the record and append a space and the identity
///
/// No terminator is appended. A pairing handshake that needs the trailing
/// NUL gets it from [`pairing_payload`].
pub fn encode_text(record: &[u8], identity: &str) -> String {
    let mut line = STANDARD.encode(record);
    line.reserve(identity.len() + 1);
    line.push(' ');
    line.push_str(identity);
    line
}

/// Binary-encode a public key and render it as a key line
pub fn encode_key_text(modulus: &BigUint, exponent: u32, identity: &str) -> Result<String> {
    let record = binary::encode(modulus, exponent)?;
    Ok(encode_text(&record, identity))
}

/// Bytes sent during pairing: the key line followed by a NUL terminator
pub fn pairing_payload(line: &str) -> Vec<u8> {
    let mut payload = Vec::with_capacity(line.len() + 1);
    payload.extend_from_slice(line.as_bytes());
    payload.push(ADB_PAIRING_TERMINATOR);
    payload
}

/// A parsed key line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyLine {
    record: Vec<u8>,
    identity: String,
}

impl KeyLine {
    pub fn new(record: Vec<u8>, identity: impl Into<String>) -> Self {
        Self {
            record,
            identity: identity.into(),
        }
    }

    /// Encode `key` and label it with `identity`
    pub fn from_key(key: &RsaPublicKey, identity: impl Into<String>) -> Result<Self> {
        Ok(Self::new(binary::encode_key(key)?, identity))
    }

    /// Parse `<base64> <identity>`
    ///
    /// A trailing newline or NUL is dropped. The identity is everything
    /// after the first space and may be empty.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(|c| matches!(c, '\n' | '\r' | '\0'));
        let (payload, identity) = line.split_once(' ').unwrap_or((line, ""));
        validate::record(!payload.is_empty(), "adb key line", "missing base64 payload")?;

        let record = STANDARD.decode(payload)?;
        Ok(Self::new(record, identity))
    }

    pub fn record(&self) -> &[u8] {
        &self.record
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Decode the record with the ADB layout
    pub fn decode(&self) -> Result<KeyRecord> {
        binary::decode(&self.record)
    }

    /// The NUL-terminated bytes the pairing handshake sends
    pub fn to_pairing_payload(&self) -> Vec<u8> {
        pairing_payload(&self.to_string())
    }
}

impl fmt::Display for KeyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_text(&self.record, &self.identity))
    }
}

impl FromStr for KeyLine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
