//! Property-based tests for the ADB key encoding

use adbkey_encoding::{binary, encode, encode_text, KeyLayout, KeyLine};
use adbkey_internal::endian::{u32_from_le_bytes, u32_le_words};
use adbkey_tests::random_odd_modulus;
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Odd moduli of 1 to 64 words, top word non-zero
fn odd_modulus() -> impl Strategy<Value = BigUint> {
    (any::<u64>(), 1usize..=64).prop_map(|(seed, words)| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        random_odd_modulus(&mut rng, words)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn record_is_always_524_bytes(modulus in odd_modulus(), exponent in any::<u32>()) {
        let record = encode(&modulus, exponent).unwrap();
        prop_assert_eq!(record.len(), 524);
    }

    #[test]
    fn record_roundtrips_key(modulus in odd_modulus(), exponent in any::<u32>()) {
        let record = binary::decode(&encode(&modulus, exponent).unwrap()).unwrap();
        prop_assert_eq!(record.word_count(), 64);
        prop_assert_eq!(record.modulus(), modulus);
        prop_assert_eq!(record.exponent(), exponent);
    }

    #[test]
    fn n0inv_is_negated_inverse(modulus in odd_modulus()) {
        let record = encode(&modulus, 65537).unwrap();
        let n0inv = u32_from_le_bytes(&record[4..8]);
        let low = modulus.to_u32_digits()[0];

        prop_assert_eq!(low.wrapping_mul(n0inv.wrapping_neg()), 1);
    }

    #[test]
    fn rr_is_r_squared_mod_n(modulus in odd_modulus()) {
        let record = encode(&modulus, 65537).unwrap();
        let rr = BigUint::from_slice(&u32_le_words(&record[264..520]).collect::<Vec<_>>());

        let r = BigUint::from(1u32) << 2048u32;
        prop_assert_eq!(rr, (&r * &r) % &modulus);
    }

    #[test]
    fn encoding_is_deterministic(modulus in odd_modulus(), exponent in any::<u32>()) {
        prop_assert_eq!(encode(&modulus, exponent).unwrap(), encode(&modulus, exponent).unwrap());
    }

    #[test]
    fn text_roundtrips(modulus in odd_modulus(), identity in "[a-z]{1,8}@[a-z]{1,8}") {
        let record = encode(&modulus, 65537).unwrap();
        let line = encode_text(&record, &identity);

        let parsed = KeyLine::parse(&line).unwrap();
        prop_assert_eq!(parsed.record(), record.as_slice());
        prop_assert_eq!(parsed.identity(), identity.as_str());
    }

    #[test]
    fn too_wide_modulus_is_rejected(modulus in odd_modulus(), extra in 1u32..64) {
        let wide = (modulus << (2048 + extra as usize - 1)) + 1u32;
        prop_assert!(encode(&wide, 65537).is_err());
    }

    #[test]
    fn narrow_layouts_roundtrip(value in 3u32..=0xffff, exponent in any::<u32>()) {
        let modulus = BigUint::from(value | 1);
        let layout = KeyLayout::new(2, 8).unwrap();

        let bytes = binary::encode_with_layout(&modulus, exponent, &layout).unwrap();
        let record = binary::decode_with_layout(&bytes, &layout).unwrap();
        prop_assert!(record.verify().is_ok());
        prop_assert_eq!(record.modulus(), modulus);
    }
}
