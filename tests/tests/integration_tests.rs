// Known-answer and cross-crate tests for the ADB key encoding

use adbkey_api::{Error as CoreError, PublicKeyParts, Serialize};
use adbkey_encoding::{
    binary, encode, encode_key_text, encode_text, pairing_payload, AuthorizedKeys, Error, KeyLine,
    KeyRecord, RsaPublicKey,
};
use adbkey_internal::endian::u32_from_le_bytes;
use adbkey_params::adb::{ADB_EXPONENT_OFFSET, ADB_N0INV_OFFSET, ADB_RECORD_LEN};
use adbkey_params::traditional::rsa::RSA_2048_BYTE_LENGTH;
use adbkey_tests::{adb_key_line, adb_modulus, vectors};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use num_bigint::BigUint;

struct ProviderKey {
    n: BigUint,
    e: BigUint,
}

impl PublicKeyParts for ProviderKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

#[test]
fn test_known_key_record_is_byte_exact() {
    let expected = STANDARD.decode(vectors::ADB_RECORD_BASE64).unwrap();
    let record = encode(&adb_modulus(), vectors::ADB_EXPONENT).unwrap();

    assert_eq!(record.len(), ADB_RECORD_LEN);
    assert_eq!(hex::encode(&record), hex::encode(&expected));
    assert_eq!(u32_from_le_bytes(&record[ADB_N0INV_OFFSET..]), vectors::ADB_N0INV);
    assert_eq!(u32_from_le_bytes(&record[ADB_EXPONENT_OFFSET..]), 65537);
}

#[test]
fn test_known_key_line_is_exact() {
    let line = encode_key_text(&adb_modulus(), vectors::ADB_EXPONENT, vectors::ADB_IDENTITY).unwrap();
    assert_eq!(line, adb_key_line());
}

#[test]
fn test_known_key_line_decodes() {
    let line = KeyLine::parse(&adb_key_line()).unwrap();
    assert_eq!(line.identity(), vectors::ADB_IDENTITY);

    let record = line.decode().unwrap();
    record.verify().unwrap();
    assert_eq!(record.modulus(), adb_modulus());
    assert_eq!(record.exponent(), vectors::ADB_EXPONENT);
    assert_eq!(record.n0inv(), vectors::ADB_N0INV);
}

#[test]
fn test_provider_key_to_pairing_payload() {
    let provider = ProviderKey {
        n: adb_modulus(),
        e: BigUint::from(vectors::ADB_EXPONENT),
    };
    assert_eq!(provider.size(), RSA_2048_BYTE_LENGTH);

    let key = RsaPublicKey::from_parts(&provider).unwrap();
    let line = KeyLine::from_key(&key, vectors::ADB_IDENTITY).unwrap();

    let mut expected = adb_key_line().into_bytes();
    expected.push(0);
    assert_eq!(line.to_pairing_payload(), expected);
    assert_eq!(pairing_payload(&line.to_string()), expected);
}

#[test]
fn test_provider_key_with_wide_exponent_is_unusable() {
    let provider = ProviderKey {
        n: adb_modulus(),
        e: (BigUint::from(1u32) << 40u32) + 1u32,
    };
    let err = RsaPublicKey::from_parts(&provider).unwrap_err();

    assert_eq!(err, Error::ExponentTooWide { bits: 41 });
    assert!(err.is_precondition_violation());

    let core: CoreError = err.into();
    assert!(core.is_invalid_key());
}

#[test]
fn test_record_through_serialize_trait() {
    let bytes = STANDARD.decode(vectors::ADB_RECORD_BASE64).unwrap();
    let record = KeyRecord::from_bytes(&bytes).unwrap();
    assert_eq!(Serialize::to_bytes(&record), bytes);
}

#[test]
fn test_authorized_keys_with_known_key() {
    let contents = format!("{}\n", adb_key_line());
    let keys: AuthorizedKeys = contents.parse().unwrap();
    keys.verify_all().unwrap();

    let record = binary::encode(&adb_modulus(), vectors::ADB_EXPONENT).unwrap();
    assert_eq!(keys.find(&record), Some(vectors::ADB_IDENTITY));
    assert_eq!(keys.to_string(), contents);

    let other = encode_text(&binary::encode(&BigUint::from(323u32), 3).unwrap(), "toy@test");
    let mut keys = keys;
    assert!(keys.add(KeyLine::parse(&other).unwrap()));
    assert_eq!(keys.len(), 2);
}
