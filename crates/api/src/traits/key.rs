//! Components of an RSA public key as handed over by a key provider
//!
//! Key generation, storage and the private half live outside this library.
//! Whatever yields the public key only has to expose its modulus and
//! exponent.

use num_bigint::BigUint;

/// Components of an RSA public key.
pub trait PublicKeyParts {
    /// Returns the modulus of the key.
    fn n(&self) -> &BigUint;

    /// Returns the public exponent of the key.
    fn e(&self) -> &BigUint;

    /// Returns the modulus size in bytes.
    fn size(&self) -> usize {
        ((self.n().bits() + 7) / 8) as usize
    }
}
