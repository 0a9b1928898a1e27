use crate::hash::sha256::DIGEST_LEN;

/// A SHA-256 digest.
///
/// The value is stored as 32 bytes in **big-endian** order. Its `Display`
/// form is 64 lowercase hexadecimal characters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    /// Returns the digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest as eight 32-bit words, most significant first.
    pub fn words(&self) -> [u32; 8] {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(self.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}
