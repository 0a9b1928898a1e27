//! Primitive types
//!
//! This module defines the fixed-size values produced by the hash
//! functions of this crate.
//!
//! Current primitives include:
//! - `Digest`: a 256-bit SHA-256 output with hexadecimal formatting

mod digest;

pub use digest::Digest;
