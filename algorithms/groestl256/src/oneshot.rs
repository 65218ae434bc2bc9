//! Public API Layer
//!
use crate::engine::{finalizer, BlockAbsorber};
use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};
use crate::kernels::portable::{output_transform, state_from_bytes, truncate};
use crate::types::Digest;
use subtle::ConstantTimeEq;

#[cfg(feature = "std")]
use std::string::String;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the Groestl-256 digest of `input`.
///
/// # Example
/// ```rust
/// let digest = groestl256::hash(b"abc");
/// assert_eq!(
///     hex::encode(digest),
///     "f3c1bb19c048801326a7efbcf16e3d7887446249829c379e1840d1a3a1e7d4d2"
/// );
/// ```
#[must_use]
pub fn hash(input: &[u8]) -> Digest {
    let mut absorber = BlockAbsorber::new();
    absorber.absorb(input);
    finalizer::finalize(absorber)
}

/// Compute the digest and render it as lowercase hex.
#[cfg(feature = "std")]
#[must_use]
pub fn hash_hex(input: &[u8]) -> String {
    hex::encode(hash(input))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the digest of `input` and compare it with `expected` in constant time.
///
/// # Example
/// ```rust
/// let data = b"Integrity";
/// let digest = groestl256::hash(data);
/// assert!(groestl256::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &Digest) -> bool {
    let computed = hash(input);
    computed.ct_eq(expected).into()
}

// =============================================================================
// DIGEST COMPRESSION
// =============================================================================

/// Compress two digests into one with the Groestl output transformation.
///
/// Computes `trunc(P(x) ^ x)` where `x = left || right`. This is not the
/// Groestl hash of the 64-byte concatenation; it is the 512-to-256-bit
/// Matyas-Meyer-Oseas step used to build Merkle trees over digests.
///
/// # Example
/// ```rust
/// let leaf_a = groestl256::hash(b"a");
/// let leaf_b = groestl256::hash(b"b");
/// let root = groestl256::compress_digests(&leaf_a, &leaf_b);
/// assert_ne!(root, groestl256::compress_digests(&leaf_b, &leaf_a));
/// ```
#[must_use]
pub fn compress_digests(left: &Digest, right: &Digest) -> Digest {
    let mut block = [0u8; BLOCK_SIZE];
    block[..DIGEST_SIZE].copy_from_slice(left);
    block[DIGEST_SIZE..].copy_from_slice(right);
    truncate(&output_transform(&state_from_bytes(&block)))
}
