//! Portable implementation of the 512-bit P and Q permutations.
//!
//! Table-driven: `SubBytes`, `ShiftBytes` and `MixBytes` are fused into eight
//! lookups per output column against two 256-entry tables.

use crate::kernels::constants::{BLOCK_SIZE, COLS, ROUNDS, T0, T4};
use crate::types::{State, Variant};

pub use self::utils::{state_from_bytes, state_to_bytes, truncate, xor_state};
use self::utils::row_byte;

mod utils;

// =============================================================================
// PERMUTATION ENGINE
// =============================================================================

/// Apply the 10-round permutation selected by `variant`.
#[must_use]
pub fn permute(state: &State, variant: Variant) -> State {
    let shifts = variant.shifts();
    let mut x = *state;
    for round in 0..ROUNDS {
        for (column, word) in x.iter_mut().enumerate() {
            *word ^= variant.round_constant(column, round);
        }
        x = sub_shift_mix(&x, shifts);
    }
    x
}

/// Permutation P.
#[inline]
#[must_use]
pub fn p(state: &State) -> State {
    permute(state, Variant::P)
}

/// Permutation Q.
#[inline]
#[must_use]
pub fn q(state: &State) -> State {
    permute(state, Variant::Q)
}

/// Fused `SubBytes` + `ShiftBytes` + `MixBytes`.
///
/// Output column `d` takes row `i` from input column `(d + shifts[i]) % 8`.
#[inline]
fn sub_shift_mix(x: &State, shifts: &[usize; COLS]) -> State {
    let mut out = [0u64; COLS];
    for (d, column) in out.iter_mut().enumerate() {
        let b = |row: usize| row_byte(x[(d + shifts[row]) % COLS], row);
        *column = T0[b(0)]
            ^ T0[b(1)].rotate_right(8)
            ^ T0[b(2)].rotate_right(16)
            ^ T0[b(3)].rotate_right(24)
            ^ T4[b(4)]
            ^ T4[b(5)].rotate_right(8)
            ^ T4[b(6)].rotate_right(16)
            ^ T4[b(7)].rotate_right(24);
    }
    out
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Compression function: `h ^= P(h ^ m) ^ Q(m)`.
pub fn compress(h: &mut State, block: &[u8; BLOCK_SIZE]) {
    let m = state_from_bytes(block);

    let mut hm = *h;
    xor_state(&mut hm, &m);

    let g = p(&hm);
    let k = q(&m);
    xor_state(h, &g);
    xor_state(h, &k);
}

/// Output transformation: `P(h) ^ h`, still full width.
#[must_use]
pub fn output_transform(h: &State) -> State {
    let mut out = p(h);
    xor_state(&mut out, h);
    out
}
