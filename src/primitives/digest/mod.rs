//! 256-bit digest primitive
//!
//! `Digest` is a **simple, explicit value type** holding the 32 bytes of a
//! SHA-256 output in big-endian order, the same order the hash state words
//! are serialized in.
//!
//! Conversions to and from raw bytes live in `conv`, hexadecimal
//! formatting and parsing in `hex`.

mod conv;
mod core;
mod hex;

pub use self::core::Digest;
