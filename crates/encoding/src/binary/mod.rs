//! Binary ADB key record
//!
//! Layout (all fields little-endian 32-bit, sizes for the ADB layout):
//! word count, n0inv, 64 modulus words, 64 R^2 mod N words, exponent.
//! Words are stored least significant first. See [`adbkey_params::adb`].

use adbkey_api::error::validation;
use adbkey_api::Serialize;
use adbkey_internal::endian::{u32_from_le_bytes, u32_le_words, u32_to_le_bytes, write_u32_le_words};
use adbkey_params::adb::ADB_RECORD_LEN;
use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::error::{validate, Error, Result};
use crate::key::RsaPublicKey;
use crate::layout::KeyLayout;
use crate::montgomery::MontgomeryParams;

const RECORD: &str = "ADB key record";

/// Encode a public key into the 524-byte ADB record
pub fn encode(modulus: &BigUint, exponent: u32) -> Result<Vec<u8>> {
    encode_with_layout(modulus, exponent, &KeyLayout::ADB)
}

/// Encode an already validated public key into the ADB record
pub fn encode_key(key: &RsaPublicKey) -> Result<Vec<u8>> {
    encode(key.modulus(), key.exponent())
}

/// Encode a public key under an arbitrary layout
///
/// Moduli narrower than the layout are zero-padded in the high words;
/// wider ones fail with [`Error::ModulusTooWide`].
pub fn encode_with_layout(modulus: &BigUint, exponent: u32, layout: &KeyLayout) -> Result<Vec<u8>> {
    KeyRecord::new(modulus, exponent, layout).map(|record| {
        let bytes = record.to_bytes();
        debug!(
            word_count = layout.word_count(),
            modulus_bits = modulus.bits(),
            len = bytes.len(),
            "encoded key record"
        );
        bytes
    })
}

/// Decode an ADB record
pub fn decode(bytes: &[u8]) -> Result<KeyRecord> {
    decode_with_layout(bytes, &KeyLayout::ADB)
}

/// Decode a record written with `layout`
///
/// Only the structure is checked; call [`KeyRecord::verify`] to check the
/// Montgomery constants against the modulus.
pub fn decode_with_layout(bytes: &[u8], layout: &KeyLayout) -> Result<KeyRecord> {
    layout.check()?;
    validate::length(RECORD, bytes.len(), layout.record_len())?;

    let word_count = u32_from_le_bytes(&bytes[layout.word_count_offset()..]);
    validate::record(
        word_count as usize == layout.word_count(),
        RECORD,
        "word count does not match the key layout",
    )?;

    let n0inv = u32_from_le_bytes(&bytes[layout.n0inv_offset()..]);
    let modulus_words = read_words(&bytes[layout.modulus_offset()..layout.rr_offset()], layout)?;
    let rr_words = read_words(&bytes[layout.rr_offset()..layout.exponent_offset()], layout)?;
    let exponent = u32_from_le_bytes(&bytes[layout.exponent_offset()..]);

    debug!(word_count, len = bytes.len(), "decoded key record");
    Ok(KeyRecord {
        layout: *layout,
        n0inv,
        modulus_words,
        rr_words,
        exponent,
    })
}

/// Fields of a key record, words least significant first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    layout: KeyLayout,
    n0inv: u32,
    modulus_words: Vec<u32>,
    rr_words: Vec<u32>,
    exponent: u32,
}

impl KeyRecord {
    /// Derive the record for a public key
    pub fn new(modulus: &BigUint, exponent: u32, layout: &KeyLayout) -> Result<Self> {
        let bits = modulus.bits();
        if bits > layout.modulus_bits() {
            return Err(Error::ModulusTooWide {
                bits,
                max_bits: layout.modulus_bits(),
            });
        }

        // Validates the layout and the modulus
        let params = MontgomeryParams::compute(modulus, layout)?;
        Ok(Self {
            layout: *layout,
            n0inv: params.n0inv,
            modulus_words: to_words(modulus, layout)?,
            rr_words: to_words(&params.rr, layout)?,
            exponent,
        })
    }

    pub fn layout(&self) -> &KeyLayout {
        &self.layout
    }

    pub fn word_count(&self) -> usize {
        self.layout.word_count()
    }

    pub fn n0inv(&self) -> u32 {
        self.n0inv
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn modulus_words(&self) -> &[u32] {
        &self.modulus_words
    }

    pub fn rr_words(&self) -> &[u32] {
        &self.rr_words
    }

    pub fn modulus(&self) -> BigUint {
        from_words(&self.modulus_words, &self.layout)
    }

    pub fn rr(&self) -> BigUint {
        from_words(&self.rr_words, &self.layout)
    }

    /// The public key carried by the record
    pub fn public_key(&self) -> Result<RsaPublicKey> {
        RsaPublicKey::new(self.modulus(), self.exponent)
    }

    /// Check that n0inv and RR belong to the modulus
    pub fn verify(&self) -> Result<()> {
        let modulus = self.modulus();
        let expected = MontgomeryParams::compute(&modulus, &self.layout)?;

        let result = validate::record(expected.n0inv == self.n0inv, RECORD, "n0inv does not match the modulus")
            .and_then(|_| validate::record(expected.rr == self.rr(), RECORD, "R^2 mod N does not match the modulus"));
        if let Err(e) = &result {
            warn!(modulus_bits = modulus.bits(), error = %e, "key record failed verification");
        }
        result
    }

    /// Serialize the fields back into record bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let layout = &self.layout;
        let mut out = vec![0u8; layout.record_len()];

        out[layout.word_count_offset()..layout.n0inv_offset()]
            .copy_from_slice(&u32_to_le_bytes(layout.word_count() as u32));
        out[layout.n0inv_offset()..layout.modulus_offset()].copy_from_slice(&u32_to_le_bytes(self.n0inv));
        write_u32_le_words(&mut out[layout.modulus_offset()..layout.rr_offset()], &self.modulus_words);
        write_u32_le_words(&mut out[layout.rr_offset()..layout.exponent_offset()], &self.rr_words);
        out[layout.exponent_offset()..].copy_from_slice(&u32_to_le_bytes(self.exponent));

        out
    }
}

impl Serialize for KeyRecord {
    fn from_bytes(bytes: &[u8]) -> adbkey_api::Result<Self> {
        validation::length(RECORD, bytes.len(), ADB_RECORD_LEN)?;
        decode(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        KeyRecord::to_bytes(self)
    }
}

/// Split `value` into exactly `word_count` words of `word_bits` each
fn to_words(value: &BigUint, layout: &KeyLayout) -> Result<Vec<u32>> {
    let word_bits = layout.word_bits();
    let mask = layout.word_mask();
    let per_digit = 32 / word_bits;

    let mut words: Vec<u32> = value
        .to_u32_digits()
        .into_iter()
        .flat_map(|digit| (0..per_digit).map(move |i| (digit >> (i * word_bits)) & mask))
        .collect();
    while words.last() == Some(&0) {
        words.pop();
    }

    if words.len() > layout.word_count() {
        return Err(Error::ModulusTooWide {
            bits: value.bits(),
            max_bits: layout.modulus_bits(),
        });
    }
    words.resize(layout.word_count(), 0);
    Ok(words)
}

fn from_words(words: &[u32], layout: &KeyLayout) -> BigUint {
    words.iter().rev().fold(BigUint::default(), |acc, &word| {
        (acc << layout.word_bits()) + word
    })
}

fn read_words(bytes: &[u8], layout: &KeyLayout) -> Result<Vec<u32>> {
    let mask = layout.word_mask();
    u32_le_words(bytes)
        .map(|word| {
            validate::record(word & !mask == 0, RECORD, "word exceeds the layout word size")?;
            Ok(word)
        })
        .collect()
}
