//! SHA-256 core hashing functions
//!
//! This module implements the core logic of the SHA-256 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the running hash state carried from block to block
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input

use tracing::trace;

use super::computations::all_rounds;
use super::padding::pad;
use super::schedule::Schedule;
use super::{BLOCK_LEN, Block, H256_INIT};
use crate::primitives::Digest;

/// The 8-word running hash state.
///
/// This is the only value carried from one block to the next. It starts at
/// `H256_INIT` and is updated in place by every compression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl HashState {
    pub const fn new() -> Self {
        HashState(H256_INIT)
    }

    /// Current state words, in initialization order.
    pub const fn words(&self) -> [u32; 8] {
        self.0
    }

    /// Adds the final working registers of a block to the state, word by
    /// word, modulo 2³².
    pub fn accumulate(&mut self, registers: [u32; 8]) {
        for (word, reg) in self.0.iter_mut().zip(registers) {
            *word = word.wrapping_add(reg);
        }
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashState> for Digest {
    fn from(state: HashState) -> Self {
        Digest::from(state.0)
    }
}

/// Compresses a single 512-bit message block.
///
/// This function expands the block into its message schedule and runs the
/// 64 SHA-256 rounds, updating `state` in place.
#[inline(always)]
pub fn compress(block: &Block, state: &mut HashState) {
    let schedule = Schedule::expand(block);
    all_rounds(state, &schedule);
}

/// Splits a padded message into its ordered 64-byte blocks.
///
/// Trailing bytes that do not fill a whole block are not yielded; the
/// output of `padding::pad` never has any.
pub fn blocks(padded: &[u8]) -> impl Iterator<Item = &Block> {
    let (whole, rest) = padded.as_chunks::<BLOCK_LEN>();
    debug_assert!(rest.is_empty(), "padded message is not block aligned");

    whole.iter()
}

/// Computes the SHA-256 hash of the given input.
///
/// The input is taken as raw bytes. Text must be encoded by the caller
/// (e.g. `s.as_bytes()` for UTF-8) before hashing.
///
/// # Notes
/// - The implementation follows the standard Merkle–Damgård construction.
/// - Message length is encoded as a 64-bit big-endian integer (in bits).
/// - The internal state is serialized big-endian, in initialization order.
pub fn sha256(input: &[u8]) -> Digest {
    let padded = pad(input);

    trace!(
        message_len = input.len(),
        blocks = padded.len() / BLOCK_LEN,
        "sha256"
    );

    let mut state = HashState::new();

    for block in blocks(&padded) {
        compress(block, &mut state);
    }

    Digest::from(state)
}

/// Computes the SHA-256 hash of `input` as a 64-character lowercase
/// hexadecimal string.
pub fn sha256_hex(input: &[u8]) -> String {
    sha256(input).to_hex()
}
