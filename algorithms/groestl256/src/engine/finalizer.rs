//! Finalizer
//!
//! Length-encoding padding, the output transformation and truncation to the
//! 256-bit digest.

use crate::engine::absorber::BlockAbsorber;
use crate::kernels::constants::{BLOCK_SIZE, LENGTH_FIELD_SIZE, SINGLE_BLOCK_TAIL_MAX, STOP_BYTE};
use crate::kernels::portable::{output_transform, truncate};
use crate::types::Digest;

// =============================================================================
// PADDING
// =============================================================================

/// Padding appended after a buffered tail.
///
/// Layout: `0x80`, zeros, then the big-endian total block count in the last
/// eight bytes. The count includes the padding blocks themselves.
#[derive(Clone, Copy, Debug)]
pub struct Padding {
    bytes: [u8; 2 * BLOCK_SIZE],
    len: usize,
    blocks: u64,
}

impl Padding {
    /// Build the padding for `buffered` pending bytes after `absorbed` full blocks.
    pub fn new(buffered: usize, absorbed: u64) -> Self {
        debug_assert!(buffered < BLOCK_SIZE);

        let blocks: u64 = if buffered <= SINGLE_BLOCK_TAIL_MAX { 1 } else { 2 };
        // `blocks` is 1 or 2, so the cast is exact
        #[allow(clippy::cast_possible_truncation)]
        let len = blocks as usize * BLOCK_SIZE - buffered;

        let mut bytes = [0u8; 2 * BLOCK_SIZE];
        bytes[0] = STOP_BYTE;
        bytes[len - LENGTH_FIELD_SIZE..len]
            .copy_from_slice(&absorbed.wrapping_add(blocks).to_be_bytes());

        Self { bytes, len, blocks }
    }

    /// Padding bytes to feed through the absorber.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Blocks the padding completes (1 or 2).
    pub const fn blocks(&self) -> u64 {
        self.blocks
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Pad, compress the final block(s), apply `P(h) ^ h` and keep the low half.
pub fn finalize(mut absorber: BlockAbsorber) -> Digest {
    let padding = Padding::new(absorber.buffered(), absorber.blocks());
    absorber.absorb(padding.as_bytes());
    debug_assert_eq!(absorber.buffered(), 0);

    tracing::trace!(
        blocks = absorber.blocks(),
        padded = padding.blocks(),
        "groestl256 finalized"
    );

    truncate(&output_transform(absorber.state()))
}
