//! Constants for RSA algorithm

/// RSA with 2048-bit modulus
pub const RSA_MODULUS_2048: usize = 2048;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;

/// Byte length for RSA-2048 key
pub const RSA_2048_BYTE_LENGTH: usize = RSA_MODULUS_2048 / 8;

/// Widest public exponent the ADB record can carry, in bits
pub const RSA_MAX_EXPONENT_BITS: u64 = 32;
