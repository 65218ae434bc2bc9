//! Block Absorber
//!
//! Buffers input into 64-byte blocks and folds every full block into the
//! chaining state with the compression function.

use crate::kernels::constants::{BLOCK_SIZE, COLS, OUTPUT_BITS};
use crate::kernels::portable::compress;
use crate::types::State;

// =============================================================================
// ABSORBER
// =============================================================================

/// Chaining state plus the partial block not yet compressed.
#[derive(Clone, Debug)]
pub struct BlockAbsorber {
    /// Wide-pipe chaining value
    state: State,
    /// Pending bytes (only `buffer[..offset]` is meaningful)
    buffer: [u8; BLOCK_SIZE],
    /// Number of buffered bytes (always < `BLOCK_SIZE` between calls)
    offset: usize,
    /// Blocks compressed so far
    blocks: u64,
}

impl BlockAbsorber {
    /// Fresh absorber: zero state with the last column seeded to the output size in bits.
    pub const fn new() -> Self {
        let mut state = [0u64; COLS];
        state[COLS - 1] = OUTPUT_BITS;
        Self {
            state,
            buffer: [0u8; BLOCK_SIZE],
            offset: 0,
            blocks: 0,
        }
    }

    /// Append `data`, compressing every block that fills up.
    pub fn absorb(&mut self, mut data: &[u8]) {
        // Top up a partially filled buffer first
        if self.offset > 0 {
            let take = (BLOCK_SIZE - self.offset).min(data.len());
            self.buffer[self.offset..self.offset + take].copy_from_slice(&data[..take]);
            self.offset += take;
            data = &data[take..];

            if self.offset < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.compress_block(&block);
            self.offset = 0;
        }

        // Full blocks straight from the input
        let (blocks, rest) = data.as_chunks::<BLOCK_SIZE>();
        for block in blocks {
            self.compress_block(block);
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.offset = rest.len();
    }

    fn compress_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        compress(&mut self.state, block);
        self.blocks = self.blocks.wrapping_add(1);
    }

    /// Current chaining value.
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Number of blocks compressed so far.
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Number of bytes waiting for a full block.
    pub const fn buffered(&self) -> usize {
        self.offset
    }
}

impl Default for BlockAbsorber {
    fn default() -> Self {
        Self::new()
    }
}
