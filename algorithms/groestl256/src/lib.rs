#![cfg_attr(not(feature = "std"), no_std)]

//! # Groestl-256
//!
//! Portable implementation of the Groestl-256 hash function: a wide-pipe
//! construction with a 512-bit chaining state compressed by two AES-like
//! permutations, P and Q.
//!
//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = groestl256::hash(b"Groestl");
//! println!("{}", hex::encode(digest));
//!
//! // 2. Verification
//! assert!(groestl256::verify(b"Groestl", &digest));
//!
//! // 3. Streaming
//! use groestl256::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"Groe");
//! hasher.update(b"stl");
//! assert_eq!(hasher.sum(), digest);
//! assert_eq!(hasher.finalize(), digest);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Permutations are exposed for tests and benchmarks, but hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::parallel::hash_many;
pub use kernels::constants::{BLOCK_SIZE, DIGEST_SIZE};
#[cfg(feature = "std")]
pub use oneshot::hash_hex;
pub use oneshot::{compress_digests, hash, verify};
pub use streaming::Groestl256Hasher as Hasher;
pub use types::{parse_digest, Digest, ParseDigestError, State, Variant};
