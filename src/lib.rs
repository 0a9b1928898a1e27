//! SHA-256 for Cryptal
//!
//! This crate computes the SHA-256 digest (FIPS 180-4) of an arbitrary
//! byte sequence and renders it as a 64-character lowercase hexadecimal
//! string.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! stage of the algorithm is exposed as a small pure function over an
//! explicit value type, so each can be tested in isolation.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 hash function, split into its stages:
//!   padding, message schedule expansion, the compression rounds, and
//!   digest assembly.
//!
//! - `primitives`
//!   The fixed-size `Digest` value returned by the hash, with its
//!   hexadecimal formatting and parsing.
//!
//! - `error`
//!   Error types for the few fallible operations at the edges of the crate
//!   (parsing a hexadecimal digest, turning command-line input into bytes).
//!   Hashing itself never fails.
//!
//! - `cli`, `input`, `logging`
//!   Support for the `cryptal-sha256` binary: argument parsing and output,
//!   converting arguments and files into message bytes, and `tracing`
//!   subscriber setup.
//!
//! # Example
//!
//! ```
//! use cryptal_sha256::hash::sha256;
//!
//! let digest = sha256(b"abc");
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! # Design goals
//!
//! - Input is always `&[u8]`; text must be encoded by the caller
//! - No shared mutable state, every function is reentrant
//! - All word arithmetic is explicitly modulo 2³²
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries.

pub mod cli;
pub mod error;
pub mod hash;
pub mod input;
pub mod logging;
pub mod primitives;
