//! Sources of random bytes for polynomial coefficients
//!
//! Every source implements [`RandomSource`]. A split acquires its source through
//! [`acquire`], which returns a [`ScopedSource`] that releases the underlying
//! handle when dropped, whichever way the split exits.

use crate::error::{Result, ShamirError};
use rand::rngs::OsRng;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng, TryRngCore};
use std::fs::File;
use std::io::Read;
use tracing::trace;

const DEV_RANDOM: &str = "/dev/random";

/// Enveloped secrets up to this many bytes default to the blocking source
pub const BLOCKING_SOURCE_MAX_LEN: usize = 65;

/// Capability to produce random bytes on demand
///
/// # Example
/// ```
/// use prime_share::{RandomSource, SeededRandom};
///
/// let mut source = SeededRandom::from_seed([7u8; 32]);
/// let bytes = source.next_bytes(16).unwrap();
/// assert_eq!(bytes.len(), 16);
/// ```
pub trait RandomSource {
    /// Returns exactly `count` random bytes
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>>;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        (**self).next_bytes(count)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        (**self).next_bytes(count)
    }
}

/// Which source a split should draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomnessPreference {
    /// Blocking source for short secrets, fast source otherwise
    Auto,
    /// Always use [`FastRandom`]
    Fast,
    /// Always use [`BlockingRandom`]
    Blocking,
}

impl Default for RandomnessPreference {
    fn default() -> Self {
        Self::Auto
    }
}

impl RandomnessPreference {
    /// Whether a secret of `envelope_len` bytes (sentinel included) gets the blocking source
    pub fn uses_blocking(self, envelope_len: usize) -> bool {
        match self {
            Self::Auto => envelope_len <= BLOCKING_SOURCE_MAX_LEN,
            Self::Fast => false,
            Self::Blocking => true,
        }
    }
}

/// Non-blocking source: ChaCha20 seeded once from the operating system
pub struct FastRandom {
    rng: ChaCha20Rng,
}

impl FastRandom {
    pub fn new() -> Result<Self> {
        let rng = ChaCha20Rng::try_from_rng(&mut OsRng)
            .map_err(|e| ShamirError::Randomness(e.to_string()))?;
        Ok(Self { rng })
    }
}

impl RandomSource for FastRandom {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.rng.fill_bytes(&mut buf);
        Ok(buf)
    }
}

/// Reads the kernel's blocking entropy device
///
/// Falls back to the operating system RNG when `/dev/random` cannot be opened.
/// Reads may stall until the entropy pool is ready. The device handle is closed
/// on drop.
pub struct BlockingRandom {
    device: Option<File>,
}

impl BlockingRandom {
    pub fn open() -> Self {
        let device = match File::open(DEV_RANDOM) {
            Ok(file) => Some(file),
            Err(e) => {
                trace!(error = %e, "{DEV_RANDOM} unavailable, using OS RNG");
                None
            }
        };
        Self { device }
    }

    /// Whether reads go to the entropy device rather than the fallback
    pub fn has_device(&self) -> bool {
        self.device.is_some()
    }
}

impl RandomSource for BlockingRandom {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        match self.device.as_mut() {
            Some(file) => file.read_exact(&mut buf)?,
            None => OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| ShamirError::Randomness(e.to_string()))?,
        }
        Ok(buf)
    }
}

impl Drop for BlockingRandom {
    fn drop(&mut self) {
        if self.device.take().is_some() {
            trace!("closed {DEV_RANDOM}");
        }
    }
}

/// Deterministic ChaCha20 stream, for reproducible splits
pub struct SeededRandom {
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
        }
    }

    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.rng.fill_bytes(&mut buf);
        Ok(buf)
    }
}

/// A source held for the duration of one split
pub enum ScopedSource {
    Fast(FastRandom),
    Blocking(BlockingRandom),
}

impl RandomSource for ScopedSource {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        match self {
            Self::Fast(source) => source.next_bytes(count),
            Self::Blocking(source) => source.next_bytes(count),
        }
    }
}

impl Drop for ScopedSource {
    fn drop(&mut self) {
        trace!(blocking = matches!(self, Self::Blocking(_)), "released randomness source");
    }
}

/// Acquires the source `preference` selects for a secret of `envelope_len` bytes
pub fn acquire(preference: RandomnessPreference, envelope_len: usize) -> Result<ScopedSource> {
    let source = if preference.uses_blocking(envelope_len) {
        ScopedSource::Blocking(BlockingRandom::open())
    } else {
        ScopedSource::Fast(FastRandom::new()?)
    };
    trace!(
        blocking = matches!(source, ScopedSource::Blocking(_)),
        envelope_len,
        "acquired randomness source"
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lengths() {
        let mut fast = FastRandom::new().unwrap();
        let mut blocking = BlockingRandom::open();
        let mut seeded = SeededRandom::seed_from_u64(1);
        for count in [0usize, 1, 17, 513] {
            assert_eq!(fast.next_bytes(count).unwrap().len(), count);
            assert_eq!(blocking.next_bytes(count).unwrap().len(), count);
            assert_eq!(seeded.next_bytes(count).unwrap().len(), count);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::from_seed([9u8; 32]);
        let mut b = SeededRandom::from_seed([9u8; 32]);
        assert_eq!(a.next_bytes(64).unwrap(), b.next_bytes(64).unwrap());

        let mut c = SeededRandom::from_seed([10u8; 32]);
        assert_ne!(a.next_bytes(64).unwrap(), c.next_bytes(64).unwrap());
    }

    #[test]
    fn test_fast_sources_differ() {
        let mut a = FastRandom::new().unwrap();
        let mut b = FastRandom::new().unwrap();
        assert_ne!(a.next_bytes(32).unwrap(), b.next_bytes(32).unwrap());
    }

    #[test]
    fn test_preference_threshold() {
        let auto = RandomnessPreference::default();
        assert!(auto.uses_blocking(1));
        assert!(auto.uses_blocking(BLOCKING_SOURCE_MAX_LEN));
        assert!(!auto.uses_blocking(BLOCKING_SOURCE_MAX_LEN + 1));
        assert!(!RandomnessPreference::Fast.uses_blocking(1));
        assert!(RandomnessPreference::Blocking.uses_blocking(10_000));
    }

    #[test]
    fn test_acquire_selects_variant() {
        let source = acquire(RandomnessPreference::Auto, 10).unwrap();
        assert!(matches!(source, ScopedSource::Blocking(_)));
        let source = acquire(RandomnessPreference::Auto, 100).unwrap();
        assert!(matches!(source, ScopedSource::Fast(_)));
    }

    #[test]
    fn test_source_through_trait_object() {
        let mut boxed: Box<dyn RandomSource> = Box::new(SeededRandom::seed_from_u64(3));
        assert_eq!(boxed.next_bytes(8).unwrap().len(), 8);
    }
}
