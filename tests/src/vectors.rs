//! Known-answer vectors for the ADB key encoding

use adbkey_params::traditional::rsa::RSA_PUBLIC_EXPONENT;

/// 2048-bit RSA modulus of a real `adbkey.pub`, big-endian hex
pub const ADB_MODULUS_HEX: &str = concat!(
    "dc0e033a61536c10c54ae374682345c2cd869fd32ddf74eaf6b4f3db477a9520",
    "5ebdbf9050f490115f461e1b77871e2a7eee52b747e309e0b97e76fa5ede4ba6",
    "c82d67f5535d84b0cbc1466f8e36c4dd9f8285c5291dd467446e866c2f5f771e",
    "1c80cb3ea7cf7e2894381e19b64e986da6c9212d9fc8b95f89b82b74a0a71202",
    "24370085928367b2d67c93c6b9ee78b148686d5aed8cf13cdd265aaa3bd66a2b",
    "0ff413a3fecb9a93b6c08923282754b3342bf1999eb0b660a6f6ba8553b3b47b",
    "e2a81234e44230a7f8554f97b58dd742de1452cea8c83941ad6035ace6d7b8e7",
    "a34e1db84c52be9133b85541c0c49fe619eb3d821243a2ea5f43e3c873c3bf1d",
);

/// Public exponent of that key
pub const ADB_EXPONENT: u32 = RSA_PUBLIC_EXPONENT;

/// Identity label of that key
pub const ADB_IDENTITY: &str = "adbtools@android";

/// n0inv stored in the record
pub const ADB_N0INV: u32 = 0xa70704cb;

/// Base64 record as written to `adbkey.pub`
pub const ADB_RECORD_BASE64: &str = concat!(
    "QAAAAMsEB6cdv8NzyONDX+qiQxKCPesZ5p/EwEFVuDORvlJMuB1Oo+e41+asNWCtQTnIqM5SFN5C",
    "1421l09V+KcwQuQ0Eqjie7SzU4W69qZgtrCemfErNLNUJygjicC2k5rL/qMT9A8ratY7qlom3Tzx",
    "jO1abWhIsXjuucaTfNayZ4OShQA3JAISp6B0K7iJX7nIny0hyaZtmE62GR44lCh+z6c+y4AcHndf",
    "L2yGbkRn1B0pxYWCn93ENo5vRsHLsIRdU/VnLcimS95e+nZ+ueAJ40e3Uu5+Kh6HdxseRl8RkPRQ",
    "kL+9XiCVekfb87T26nTfLdOfhs3CRSNodONKxRBsU2E6Aw7cK/Q/wkLDgGAqzfTo12BiEO2WahQD",
    "C4MCqen7GWPZ/VwykcvrBxgsJn8xpEWPhR0lme40KNBYQBPi+ar5xO34wTMneLoV/5KUBuzSwi2x",
    "kcIWOf+61a6kNiFDByr+jWPvI7KZAFjQIeCW7Lc+GDKfNcbix8lw74f38eGoSSXuVVfYE4H6sfGn",
    "7hFfBup436X/1TXkk/jRXI7Gpye2+Q7bTqKrHc9u+gKhBBb3A2BV6boXnbaPcmoVDs5rJZ2ANtlG",
    "zHRoP7nwuzWWuslqcgvlG8bw+TLym5p8KJpfFuGZUzR/H7VpINIP7swZGYsuKwiYcxG4P11a6RFm",
    "PX3maomCUAEAAQA=",
);
