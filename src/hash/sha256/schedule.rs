//! SHA-256 message schedule
//!
//! Each 64-byte block is expanded into 64 words before compression. The
//! schedule is rebuilt for every block and never carried across blocks.

use std::ops::Index;

use super::Block;
use super::computations::{small_sigma0, small_sigma1};

/// The 64-word message schedule of one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Schedule([u32; 64]);

impl Schedule {
    /// Expands a block into its message schedule.
    ///
    /// Words `0..16` are the block read as big-endian `u32`s. Words `16..64`
    /// follow `w[j] = w[j-16] + σ0(w[j-15]) + w[j-7] + σ1(w[j-2])` mod 2³².
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; 64];

        for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
            *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for j in 16..64 {
            w[j] = w[j - 16]
                .wrapping_add(small_sigma0(w[j - 15]))
                .wrapping_add(w[j - 7])
                .wrapping_add(small_sigma1(w[j - 2]));
        }

        Schedule(w)
    }

    pub fn words(&self) -> &[u32; 64] {
        &self.0
    }
}

impl Index<usize> for Schedule {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}
