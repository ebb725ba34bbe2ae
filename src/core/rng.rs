//! Secure Random Source
//!
//! All randomness that feeds a commitment (the secret key and the
//! computer's move) must come from a cryptographically secure generator.
//! Functions here are generic over `RngCore + CryptoRng` so tests can pass
//! a seeded `StdRng`; production callers use the OS generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

/// Minimum secret key length in bytes (256 bits).
pub const MIN_KEY_BYTES: usize = 32;

/// Default secret key length in bytes.
pub const DEFAULT_KEY_BYTES: usize = MIN_KEY_BYTES;

/// Errors from the secure random source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The underlying generator could not produce bytes.
    #[error("secure random source unavailable: {0}")]
    EntropySourceUnavailable(#[source] rand::Error),

    /// Requested key length is below the 256-bit floor.
    #[error("key length {got} bytes is below the minimum of {min}")]
    KeyTooShort {
        /// Minimum accepted length.
        min: usize,
        /// Requested length.
        got: usize,
    },
}

/// Fill a fresh buffer of `len` bytes from `rng`.
pub fn random_bytes<R>(rng: &mut R, len: usize) -> Result<Vec<u8>, EntropyError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = vec![0u8; len];
    rng.try_fill_bytes(&mut buf)
        .map_err(EntropyError::EntropySourceUnavailable)?;
    Ok(buf)
}

/// Draw a uniform index in `[0, bound)`.
///
/// Uses rejection sampling so every index is equally likely; a plain
/// modulo would favour low indices whenever `bound` does not divide 2^64.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn random_index<R>(rng: &mut R, bound: usize) -> Result<usize, EntropyError>
where
    R: RngCore + CryptoRng,
{
    assert!(bound > 0, "random_index bound must be non-zero");
    let bound = bound as u64;
    // Largest multiple of `bound` that fits in u64; values at or above it are redrawn.
    let zone = u64::MAX - (u64::MAX % bound);

    loop {
        let mut raw = [0u8; 8];
        rng.try_fill_bytes(&mut raw)
            .map_err(EntropyError::EntropySourceUnavailable)?;
        let value = u64::from_le_bytes(raw);
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// The operating system's secure generator.
#[inline]
pub fn os_rng() -> OsRng {
    OsRng
}

#[cfg(test)]
pub(crate) mod test_support {
    use rand::{CryptoRng, Error, RngCore};

    /// A generator whose every fill fails, for exercising error paths.
    pub struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unimplemented!("FailingRng only supports try_fill_bytes")
        }

        fn next_u64(&mut self) -> u64 {
            unimplemented!("FailingRng only supports try_fill_bytes")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unimplemented!("FailingRng only supports try_fill_bytes")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
            Err(Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for FailingRng {}
}

#[cfg(test)]
mod tests {
    use super::test_support::FailingRng;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_bytes_length() {
        let mut rng = StdRng::seed_from_u64(12345);
        let bytes = random_bytes(&mut rng, 48).unwrap();
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn test_random_bytes_seeded_determinism() {
        let a = random_bytes(&mut StdRng::seed_from_u64(1), 32).unwrap();
        let b = random_bytes(&mut StdRng::seed_from_u64(1), 32).unwrap();
        let c = random_bytes(&mut StdRng::seed_from_u64(2), 32).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_os_rng_produces_distinct_keys() {
        let a = random_bytes(&mut os_rng(), 32).unwrap();
        let b = random_bytes(&mut os_rng(), 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_index_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for bound in [1usize, 3, 5, 7, 101] {
            for _ in 0..200 {
                assert!(random_index(&mut rng, bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn test_random_index_covers_all_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[random_index(&mut rng, 5).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_failing_source_surfaces_error() {
        assert!(matches!(
            random_bytes(&mut FailingRng, 32),
            Err(EntropyError::EntropySourceUnavailable(_))
        ));
        assert!(matches!(
            random_index(&mut FailingRng, 3),
            Err(EntropyError::EntropySourceUnavailable(_))
        ));
    }
}
