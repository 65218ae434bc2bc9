//! Shared types used across the Groestl-256 library.

use crate::kernels::constants::{COLS, DIGEST_SIZE, SHIFT_P, SHIFT_Q};
use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// STATE & DIGEST
// =============================================================================

/// 512-bit chaining value: eight big-endian columns, row 0 in the top byte.
pub type State = [u64; COLS];

/// 256-bit Groestl digest.
pub type Digest = [u8; DIGEST_SIZE];

// =============================================================================
// PERMUTATION VARIANT
// =============================================================================

/// Selects one of the two Groestl permutations.
///
/// P and Q share the fused substitution/diffusion tables and differ only in
/// their round constants and `ShiftBytes` offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Perturbs row 0; used for the chaining input and the output transform.
    P,
    /// Perturbs row 7 and complements everything else; used for the message block.
    Q,
}

impl Variant {
    /// Per-row left rotation amounts applied by `ShiftBytes`.
    #[must_use]
    pub const fn shifts(self) -> &'static [usize; COLS] {
        match self {
            Self::P => &SHIFT_P,
            Self::Q => &SHIFT_Q,
        }
    }

    /// Round constant XORed into column `column` before round `round`'s lookups.
    ///
    /// P: `(column * 0x10) ^ round` in the top byte, zero elsewhere.
    /// Q: every byte `0xff`, except the bottom byte `0xff ^ (column * 0x10) ^ round`.
    #[must_use]
    pub const fn round_constant(self, column: usize, round: usize) -> u64 {
        let rc = ((column << 4) ^ round) as u64 & 0xff;
        match self {
            Self::P => rc << 56,
            Self::Q => !rc,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error returned when a hex-encoded digest cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigestError {
    /// The string does not hold exactly `2 * DIGEST_SIZE` hex digits.
    InvalidLength {
        /// Number of characters found.
        found: usize,
    },
    /// A character that is not a hex digit.
    InvalidCharacter {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl fmt::Display for ParseDigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { found } => write!(
                f,
                "digest must be {} hex characters, found {found}",
                DIGEST_SIZE * 2
            ),
            Self::InvalidCharacter { index } => {
                write!(f, "invalid hex character at position {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ParseDigestError {}

/// Parse a hex-encoded digest (upper or lower case).
///
/// # Errors
/// Returns `ParseDigestError` if the input is not exactly 64 hex digits.
///
/// # Example
/// ```rust
/// let digest = groestl256::parse_digest(
///     "1a52d11d550039be16107f9c58db9ebcc417f16f736adb2502567119f0083467",
/// )?;
/// assert_eq!(digest, groestl256::hash(b""));
/// # Ok::<(), groestl256::ParseDigestError>(())
/// ```
pub fn parse_digest(hex_digest: &str) -> Result<Digest, ParseDigestError> {
    if hex_digest.len() != DIGEST_SIZE * 2 {
        return Err(ParseDigestError::InvalidLength {
            found: hex_digest.len(),
        });
    }

    let mut out = [0u8; DIGEST_SIZE];
    hex::decode_to_slice(hex_digest, &mut out).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { index, .. } => {
            ParseDigestError::InvalidCharacter { index }
        }
        _ => ParseDigestError::InvalidLength {
            found: hex_digest.len(),
        },
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_constants() {
        assert_eq!(Variant::P.round_constant(0, 0), 0);
        assert_eq!(Variant::P.round_constant(1, 0), 0x1000_0000_0000_0000);
        assert_eq!(Variant::P.round_constant(7, 9), 0x7900_0000_0000_0000);

        assert_eq!(Variant::Q.round_constant(0, 0), 0xffff_ffff_ffff_ffff);
        assert_eq!(Variant::Q.round_constant(1, 0), 0xffff_ffff_ffff_ffef);
        assert_eq!(Variant::Q.round_constant(7, 9), 0xffff_ffff_ffff_ff86);
    }

    #[test]
    fn test_parse_digest_errors() {
        assert_eq!(
            parse_digest("abcd"),
            Err(ParseDigestError::InvalidLength { found: 4 })
        );

        let mut bad = "0".repeat(64);
        bad.replace_range(10..11, "g");
        assert_eq!(
            parse_digest(&bad),
            Err(ParseDigestError::InvalidCharacter { index: 10 })
        );
    }

    #[test]
    fn test_parse_digest_case_insensitive() {
        let lower = "137667957fb50e3567f28f459002f6c52f80d46a0094ba4663b41b43aff53d77";
        let upper = lower.to_uppercase();
        assert_eq!(parse_digest(lower), parse_digest(&upper));
    }
}
