//! Conversions between `Digest` and byte representations
//!
//! All conversions preserve the big-endian layout of the digest.

use super::Digest;
use crate::hash::sha256::DIGEST_LEN;

/// Converts a `Digest` into a 32-byte array.
impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `Digest`.
impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(value: [u8; DIGEST_LEN]) -> Self {
        Digest(value)
    }
}

/// Converts eight 32-bit words into a `Digest`.
///
/// The words are serialized big-endian, most significant first.
impl From<[u32; 8]> for Digest {
    fn from(value: [u32; 8]) -> Self {
        let mut out = [0u8; DIGEST_LEN];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        Digest(out)
    }
}

/// Attempts to build a `Digest` from a byte slice.
///
/// Fails unless the slice is exactly 32 bytes long.
impl TryFrom<&[u8]> for Digest {
    type Error = std::array::TryFromSliceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ok(Digest(value.try_into()?))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
