//! Batch Execution Engine
//!
//! Hashes many independent messages, one absorber per message. Uses Rayon
//! when the `multithread` feature is enabled, otherwise runs serially; both
//! paths return digests in input order.

use crate::types::Digest;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Hash every input independently.
///
/// # Example
/// ```rust
/// let digests = groestl256::hash_many(&[b"a".as_slice(), b"b".as_slice()]);
/// assert_eq!(digests[1], groestl256::hash(b"b"));
/// ```
#[must_use]
pub fn hash_many<I>(inputs: &[I]) -> Vec<Digest>
where
    I: AsRef<[u8]> + Sync,
{
    tracing::debug!(inputs = inputs.len(), "groestl256 batch");
    inputs.process_each(|input| crate::hash(input.as_ref()))
}

/// Helper for feature-agnostic batch processing
trait BatchProcessor<T> {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send;
}

impl<T: Sync> BatchProcessor<T> for &[T] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
