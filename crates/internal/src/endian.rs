//! Endianness utility functions

/// Convert a u32 from little-endian byte order to native byte order
///
/// Reads the first four bytes of `bytes`; callers check the length.
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Convert a u32 from native byte order to little-endian bytes
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Write `words` into `dst` as consecutive little-endian u32 values
///
/// Returns the number of bytes written. `dst` must hold at least
/// `4 * words.len()` bytes.
pub fn write_u32_le_words(dst: &mut [u8], words: &[u32]) -> usize {
    for (chunk, word) in dst.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    words.len() * 4
}

/// Iterate over `bytes` as little-endian u32 values
///
/// A trailing partial word is ignored.
pub fn u32_le_words(bytes: &[u8]) -> impl Iterator<Item = u32> + '_ {
    bytes.chunks_exact(4).map(u32_from_le_bytes)
}
