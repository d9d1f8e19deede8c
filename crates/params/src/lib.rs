//! Constant values for adbkey operations
//!
//! This library provides the fixed parameters of the ADB RSA public key
//! record together with the RSA constants it is built around.

#![no_std]

// ADB key record layout
pub mod adb;

// Traditional algorithm constants
pub mod traditional;
