//! Montgomery constants carried in the key record
//!
//! The verifier multiplies word by word in Montgomery form and never
//! computes an inverse or R^2 itself. Both arrive precomputed:
//!
//! - `n0inv = -(N mod 2^w)^-1 mod 2^w`, the per-word reduction factor
//! - `RR = R^2 mod N` with `R = 2^(word_count * w)`, which maps a plain
//!   residue into Montgomery form

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::error::{Error, Result};
use crate::key::check_modulus;
use crate::layout::KeyLayout;

/// Precomputed constants for one modulus under one layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontgomeryParams {
    pub n0inv: u32,
    pub rr: BigUint,
}

impl MontgomeryParams {
    /// Derive both constants for `modulus`
    pub fn compute(modulus: &BigUint, layout: &KeyLayout) -> Result<Self> {
        check_inputs(modulus, layout)?;
        Ok(Self {
            n0inv: derive_n0inv(modulus, layout)?,
            rr: derive_rr(modulus, layout),
        })
    }

    /// Whether these constants belong to `modulus`
    pub fn matches(&self, modulus: &BigUint, layout: &KeyLayout) -> bool {
        Self::compute(modulus, layout).map_or(false, |expected| &expected == self)
    }
}

/// Negated inverse of the lowest modulus word, modulo 2^word_bits
///
/// Fails with `InvalidKey` for a zero, one or even modulus.
pub fn n0inv(modulus: &BigUint, layout: &KeyLayout) -> Result<u32> {
    check_inputs(modulus, layout)?;
    derive_n0inv(modulus, layout)
}

/// R^2 mod N
///
/// Fails with `InvalidKey` for a zero, one or even modulus.
pub fn rr(modulus: &BigUint, layout: &KeyLayout) -> Result<BigUint> {
    check_inputs(modulus, layout)?;
    Ok(derive_rr(modulus, layout))
}

// Layouts that skipped `KeyLayout::new` (deserialized ones) are checked here
// before `r()` sizes a shift from them.
fn check_inputs(modulus: &BigUint, layout: &KeyLayout) -> Result<()> {
    layout.check()?;
    check_modulus(modulus)
}

fn derive_n0inv(modulus: &BigUint, layout: &KeyLayout) -> Result<u32> {
    let base = layout.word_base();
    let low = modulus % &base;
    let inv = low.modinv(&base).ok_or(Error::InvalidKey {
        key_type: "RSA public",
        reason: "modulus has no inverse modulo the word size",
    })?;

    let n0inv = (&base - inv) % &base;
    let n0inv = n0inv.to_u32().ok_or(Error::InvalidLayout {
        reason: "word size exceeds 32 bits",
    })?;
    trace!(n0inv, word_bits = layout.word_bits(), "derived montgomery n0inv");
    Ok(n0inv)
}

fn derive_rr(modulus: &BigUint, layout: &KeyLayout) -> BigUint {
    layout.r().modpow(&BigUint::from(2u32), modulus)
}
