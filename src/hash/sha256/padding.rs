//! SHA-256 message padding
//!
//! The message is followed by a single `0x80` byte, then zero bytes up to
//! 8 bytes before the next 64-byte boundary, then the original length in
//! bits as a big-endian `u64`.

use super::BLOCK_LEN;

/// Width of the trailing length field in bytes.
const LENGTH_FIELD: usize = 8;

/// Number of `0x00` bytes placed between the `0x80` marker and the length
/// field for a message of `len` bytes.
///
/// This is `(55 - len) mod 64`.
#[inline]
pub const fn zero_fill_len(len: usize) -> usize {
    (BLOCK_LEN - (len + 1 + LENGTH_FIELD) % BLOCK_LEN) % BLOCK_LEN
}

/// Length of the padded message for a message of `len` bytes.
///
/// Always the smallest multiple of 64 that is at least `len + 9`.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    len + 1 + zero_fill_len(len) + LENGTH_FIELD
}

/// Message length in bits, modulo 2⁶⁴.
///
/// Messages of 2⁶¹ bytes or more wrap, as FIPS 180-4 only defines the
/// length field for shorter inputs.
#[inline]
pub const fn bit_length(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

/// Pads `message` to a whole number of 64-byte blocks.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let len = message.len();
    let mut out = Vec::with_capacity(padded_len(len));

    out.extend_from_slice(message);
    out.push(0x80);
    out.resize(len + 1 + zero_fill_len(len), 0x00);
    out.extend_from_slice(&bit_length(len).to_be_bytes());

    debug_assert_eq!(out.len() % BLOCK_LEN, 0);
    out
}
