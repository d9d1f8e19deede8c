//! RSA public key input

use adbkey_api::PublicKeyParts;
use adbkey_params::traditional::rsa::RSA_MAX_EXPONENT_BITS;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{validate, Error, Result};

const KEY_TYPE: &str = "RSA public";

/// RSA public key as carried in an ADB record
///
/// The modulus is odd and greater than one; the exponent fits in 32 bits.
/// The width of the modulus is checked against a layout when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    modulus: BigUint,
    exponent: u32,
}

impl RsaPublicKey {
    /// Create a key from its modulus and a 32-bit exponent
    pub fn new(modulus: BigUint, exponent: u32) -> Result<Self> {
        check_modulus(&modulus)?;
        Ok(Self { modulus, exponent })
    }

    /// Take the public half from a key provider
    ///
    /// Exponents wider than 32 bits are rejected rather than truncated.
    pub fn from_parts<K: PublicKeyParts + ?Sized>(key: &K) -> Result<Self> {
        let exponent = exponent_u32(key.e())?;
        Self::new(key.n().clone(), exponent)
    }

    /// Create a key from big-endian modulus and exponent bytes
    pub fn from_be_bytes(modulus: &[u8], exponent: &[u8]) -> Result<Self> {
        let exponent = exponent_u32(&BigUint::from_bytes_be(exponent))?;
        Self::new(BigUint::from_bytes_be(modulus), exponent)
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }
}

/// A usable modulus is odd (coprime to every power of two) and above one
pub(crate) fn check_modulus(modulus: &BigUint) -> Result<()> {
    validate::key(!modulus.is_zero(), KEY_TYPE, "modulus is zero")?;
    validate::key(!modulus.is_one(), KEY_TYPE, "modulus must be greater than one")?;
    validate::key(modulus.bit(0), KEY_TYPE, "modulus is even")
}

fn exponent_u32(exponent: &BigUint) -> Result<u32> {
    match exponent.to_u32() {
        Some(e) if exponent.bits() <= RSA_MAX_EXPONENT_BITS => Ok(e),
        _ => Err(Error::ExponentTooWide { bits: exponent.bits() }),
    }
}
