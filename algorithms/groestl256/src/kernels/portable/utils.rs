//! Conversions between byte blocks and column words.

use crate::kernels::constants::{BLOCK_SIZE, COLS, DIGEST_SIZE};
use crate::types::{Digest, State};

/// Deserialize a 64-byte block into eight big-endian columns.
#[inline]
pub fn state_from_bytes(block: &[u8; BLOCK_SIZE]) -> State {
    let mut m = [0u64; COLS];
    for (chunk, v) in block.chunks_exact(8).zip(m.iter_mut()) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *v = u64::from_be_bytes(word);
    }
    m
}

/// Serialize eight columns back to a 64-byte block.
#[inline]
pub fn state_to_bytes(state: &State) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (chunk, v) in out.chunks_exact_mut(8).zip(state) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
    out
}

/// `h ^= m`, column by column.
#[inline]
pub fn xor_state(h: &mut State, m: &State) {
    for (a, b) in h.iter_mut().zip(m) {
        *a ^= b;
    }
}

/// Serialize the low half of the state (columns 4-7) as the digest.
#[inline]
pub fn truncate(state: &State) -> Digest {
    let mut out = [0u8; DIGEST_SIZE];
    for (chunk, v) in out.chunks_exact_mut(8).zip(&state[COLS / 2..]) {
        chunk.copy_from_slice(&v.to_be_bytes());
    }
    out
}

/// Extract byte `row` (0 = most significant) of a column.
#[inline(always)]
#[allow(clippy::inline_always, clippy::cast_possible_truncation)]
pub const fn row_byte(column: u64, row: usize) -> usize {
    (column >> (56 - 8 * row)) as u8 as usize
}
