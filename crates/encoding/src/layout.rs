//! Word layout of a key record
//!
//! The ADB format fixes 64 words of 32 bits. Keeping the layout as a value
//! lets the same encoder run against toy moduli with fewer or narrower
//! words. Every field still occupies a 4-byte little-endian slot; a
//! narrower word only limits the value each slot carries.

use adbkey_params::adb::{
    record_len, ADB_KEY_WORD_COUNT, ADB_MODULUS_OFFSET, ADB_N0INV_OFFSET, ADB_WORD_BITS,
    ADB_WORD_BYTES, ADB_WORD_COUNT_OFFSET,
};
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{validate, Result};

/// Number of words and bits per word of the encoded modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyLayout {
    word_count: usize,
    word_bits: u32,
}

impl KeyLayout {
    /// The layout `adbd` expects: 64 words of 32 bits (2048-bit modulus)
    pub const ADB: KeyLayout = KeyLayout {
        word_count: ADB_KEY_WORD_COUNT,
        word_bits: ADB_WORD_BITS,
    };

    /// Largest supported word count
    pub const MAX_WORD_COUNT: usize = 1024;

    /// Create a layout, rejecting unsupported sizes
    pub fn new(word_count: usize, word_bits: u32) -> Result<Self> {
        let layout = Self { word_count, word_bits };
        layout.check()?;
        Ok(layout)
    }

    /// Re-check the invariants; deserialized layouts bypass `new`
    pub fn check(&self) -> Result<()> {
        validate::layout(
            matches!(self.word_bits, 8 | 16 | 32),
            "word size must be 8, 16 or 32 bits",
        )?;
        validate::layout(self.word_count > 0, "word count must be positive")?;
        validate::layout(
            self.word_count <= Self::MAX_WORD_COUNT,
            "word count exceeds 1024",
        )
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn word_bits(&self) -> u32 {
        self.word_bits
    }

    /// Widest modulus the layout can carry, in bits
    pub fn modulus_bits(&self) -> u64 {
        (self.word_count as u64).saturating_mul(u64::from(self.word_bits))
    }

    /// Encoded record length in bytes
    pub fn record_len(&self) -> usize {
        record_len(self.word_count)
    }

    pub fn word_count_offset(&self) -> usize {
        ADB_WORD_COUNT_OFFSET
    }

    pub fn n0inv_offset(&self) -> usize {
        ADB_N0INV_OFFSET
    }

    pub fn modulus_offset(&self) -> usize {
        ADB_MODULUS_OFFSET
    }

    pub fn rr_offset(&self) -> usize {
        self.modulus_offset() + self.word_count * ADB_WORD_BYTES
    }

    pub fn exponent_offset(&self) -> usize {
        self.rr_offset() + self.word_count * ADB_WORD_BYTES
    }

    /// Mask selecting the bits of a single word
    pub fn word_mask(&self) -> u32 {
        if self.word_bits >= 32 {
            u32::MAX
        } else {
            (1u32 << self.word_bits) - 1
        }
    }

    /// 2^word_bits
    pub(crate) fn word_base(&self) -> BigUint {
        BigUint::one() << self.word_bits
    }

    /// R = 2^(word_count * word_bits)
    pub(crate) fn r(&self) -> BigUint {
        BigUint::one() << self.modulus_bits()
    }
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self::ADB
    }
}
