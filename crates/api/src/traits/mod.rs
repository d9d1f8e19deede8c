//! Traits at the seams of the adbkey library

pub mod key;
pub mod serialize;

pub use key::PublicKeyParts;
pub use serialize::Serialize;
