use crate::{RandSource, Result};
use rand::{RngCore, TryRngCore, rng, rngs::OsRng};

/// A [`RandSource`] that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically from the OS.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free and safe. This type does **not** store the RNG itself;
/// it simply accesses the thread-local generator on each fill, which is why
/// it is a zero-sized type that may be freely cloned and shared.
///
/// Suitable for high-throughput, contention-free ID generation.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn try_fill(&self, dst: &mut [u8]) -> Result<()> {
        rng().fill_bytes(dst);
        Ok(())
    }
}

/// A [`RandSource`] that reads directly from the operating system's entropy
/// source on every fill.
///
/// Unlike [`ThreadRandom`], each fill is a syscall and can fail; failures
/// surface as [`Error::Entropy`] instead of being swallowed. Use this when
/// you want no userspace RNG state at all, or when the caller must observe
/// entropy exhaustion explicitly.
///
/// [`Error::Entropy`]: crate::Error::Entropy
#[derive(Default, Clone, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn try_fill(&self, dst: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dst)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_fills_all_bytes() {
        let mut buf = [0u8; 256];
        ThreadRandom.try_fill(&mut buf).unwrap();
        // A 256-byte fill returning all zeros means the RNG did not run.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn os_random_fills_all_bytes() {
        let mut buf = [0u8; 256];
        OsRandom.try_fill(&mut buf).unwrap();
        assert!(buf.iter().any(|&b| b != 0));
    }
}
