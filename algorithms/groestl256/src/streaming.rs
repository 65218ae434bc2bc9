//! Streaming Hasher
//!
//! Incremental Groestl-256 over arbitrarily chunked input. Memory use is
//! constant: one chaining state and one partial block.

use crate::engine::{finalizer, BlockAbsorber};
use crate::kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};
use crate::types::Digest;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming Groestl-256 hasher.
///
/// `finalize` consumes the hasher, so no input can follow it; use
/// `finalize_reset` or `sum` to keep the handle.
#[derive(Clone, Debug, Default)]
pub struct Groestl256Hasher {
    /// Chaining state, pending bytes and block counter
    absorber: BlockAbsorber,
}

impl Groestl256Hasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a new hasher in the freshly seeded state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            absorber: BlockAbsorber::new(),
        }
    }

    /// Digest size in bytes.
    #[must_use]
    pub const fn size() -> usize {
        DIGEST_SIZE
    }

    /// Compression block size in bytes.
    #[must_use]
    pub const fn block_size() -> usize {
        BLOCK_SIZE
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.absorber.absorb(data);
    }

    /// Builder-style `update`.
    #[must_use]
    pub fn chain_update(mut self, data: &[u8]) -> Self {
        self.update(data);
        self
    }

    /// Number of 64-byte blocks compressed so far.
    #[must_use]
    pub const fn blocks(&self) -> u64 {
        self.absorber.blocks()
    }

    /// Digest of everything written so far, leaving the hasher untouched.
    #[must_use]
    pub fn sum(&self) -> Digest {
        finalizer::finalize(self.absorber.clone())
    }

    /// Finalize and return the digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        finalizer::finalize(self.absorber)
    }

    /// Finalize, then return the hasher to its freshly seeded state.
    pub fn finalize_reset(&mut self) -> Digest {
        let absorber = core::mem::take(&mut self.absorber);
        finalizer::finalize(absorber)
    }

    /// Reset hasher for reuse.
    pub fn reset(&mut self) {
        self.absorber = BlockAbsorber::new();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "std")]
impl std::io::Write for Groestl256Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Groestl256Hasher {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for Groestl256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Groestl256Hasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Groestl256Hasher {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        let res = self.finalize_reset();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Groestl256Hasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Groestl256Hasher {}
