//! Hexadecimal form of `Digest`
//!
//! Digests are written as 64 lowercase hex characters, two per byte, with
//! no separators. Parsing accepts either case.

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

use super::Digest;
use crate::error::DigestParseError;
use crate::hash::sha256::DIGEST_LEN;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Length of the hexadecimal form in characters.
pub(crate) const HEX_LEN: usize = DIGEST_LEN * 2;

impl Digest {
    /// Returns the digest as a 64-character lowercase hexadecimal string.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(HEX_LEN);

        for &b in self.0.iter() {
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0f) as usize] as char);
        }

        out
    }

    /// Parses a 64-character hexadecimal digest.
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        let bytes = s.as_bytes();

        if bytes.len() != HEX_LEN {
            return Err(DigestParseError::InvalidLength {
                expected: HEX_LEN,
                found: bytes.len(),
            });
        }

        let mut out = [0u8; DIGEST_LEN];

        for (i, pair) in bytes.chunks_exact(2).enumerate() {
            let hi = nibble(pair[0], 2 * i, s)?;
            let lo = nibble(pair[1], 2 * i + 1, s)?;
            out[i] = (hi << 4) | lo;
        }

        Ok(Digest(out))
    }
}

fn nibble(c: u8, index: usize, s: &str) -> Result<u8, DigestParseError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(DigestParseError::InvalidHexDigit {
            index,
            found: s
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
    }
}

impl Display for Digest {
    /// Formats the digest as 64 lowercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}
