//! Layout of the ADB RSA public key record
//!
//! The record is what `adbd` expects in an `AUTH` RSAPUBLICKEY packet and
//! what ends up, Base64 encoded, in `adb_keys`. Every field is a
//! little-endian 32-bit value:
//!
//! | Offset | Size | Field        |
//! |--------|------|--------------|
//! | 0      | 4    | word count   |
//! | 4      | 4    | n0inv        |
//! | 8      | 256  | modulus      |
//! | 264    | 256  | R^2 mod N    |
//! | 520    | 4    | exponent     |

use crate::traditional::rsa::RSA_MODULUS_2048;

/// Bits per modulus word
pub const ADB_WORD_BITS: u32 = 32;

/// Bytes occupied by every field slot in the record
pub const ADB_WORD_BYTES: usize = 4;

/// Number of 32-bit words in the modulus
pub const ADB_KEY_WORD_COUNT: usize = RSA_MODULUS_2048 / ADB_WORD_BITS as usize;

/// Modulus width the record can represent, in bits
pub const ADB_MODULUS_BITS: usize = RSA_MODULUS_2048;

/// Offset of the word count field
pub const ADB_WORD_COUNT_OFFSET: usize = 0;

/// Offset of the Montgomery reduction constant
pub const ADB_N0INV_OFFSET: usize = 4;

/// Offset of the first modulus word
pub const ADB_MODULUS_OFFSET: usize = 8;

/// Offset of the first R^2 mod N word
pub const ADB_RR_OFFSET: usize = ADB_MODULUS_OFFSET + ADB_KEY_WORD_COUNT * ADB_WORD_BYTES;

/// Offset of the public exponent
pub const ADB_EXPONENT_OFFSET: usize = ADB_RR_OFFSET + ADB_KEY_WORD_COUNT * ADB_WORD_BYTES;

/// Total record length in bytes (524)
pub const ADB_RECORD_LEN: usize = record_len(ADB_KEY_WORD_COUNT);

/// Terminator the pairing handshake expects after the textual key
pub const ADB_PAIRING_TERMINATOR: u8 = 0;

/// Record length for a modulus of `word_count` words
///
/// Header (word count, n0inv), two word arrays and the exponent.
pub const fn record_len(word_count: usize) -> usize {
    2 * ADB_WORD_BYTES + 2 * word_count * ADB_WORD_BYTES + ADB_WORD_BYTES
}
