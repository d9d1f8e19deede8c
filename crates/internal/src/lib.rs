//! Internal utilities for the adbkey library
//!
//! Not part of the public API; only the workspace crates depend on it.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod endian;
