use crate::{RandSource, Result};

/// Default number of identifier-lengths of randomness fetched per refill.
///
/// Larger multipliers trade memory for fewer calls into the secure random
/// source; 128 benchmarked as a good general-purpose ratio.
pub const DEFAULT_MULTIPLIER: usize = 128;

/// A pre-fetched buffer of secure random bytes shared across many ID
/// generations.
///
/// The pool owns a byte buffer and a consumption cursor. Bytes at
/// `[0, offset)` have been handed out; bytes at `[offset, capacity)` are
/// unconsumed and reserved for future serves. A serve of `size` bytes
/// advances the cursor by `size`; once a consumed region is served it is
/// never re-served within the same pool generation.
///
/// ## Refill policy
///
/// When the remaining window cannot satisfy a serve:
///
/// - if the whole buffer is smaller than the request, it is reallocated to
///   `size × multiplier` and filled entirely with fresh random bytes;
/// - otherwise the **entire existing buffer** is refilled in place. The
///   unconsumed tail is discarded, not preserved.
///
/// Either way the cursor resets to zero before serving.
///
/// The pool is deliberately not synchronized; it is owned by a generator
/// which either confines it to a single thread or guards it with a lock.
///
/// # Example
/// ```
/// use tinyid::{RandomPool, ThreadRandom};
///
/// let mut pool = RandomPool::new(ThreadRandom);
/// let bytes = pool.acquire(21).unwrap();
/// assert_eq!(bytes.len(), 21);
/// ```
#[derive(Debug)]
pub struct RandomPool<R> {
    rng: R,
    buf: Vec<u8>,
    offset: usize,
    multiplier: usize,
}

impl<R> RandomPool<R>
where
    R: RandSource,
{
    /// Creates an empty pool with the default multiplier.
    ///
    /// No randomness is acquired until the first [`Self::acquire`] call.
    pub fn new(rng: R) -> Self {
        Self::with_multiplier(rng, DEFAULT_MULTIPLIER)
    }

    /// Creates an empty pool with a custom refill multiplier.
    ///
    /// Multipliers below 1 fall back to [`DEFAULT_MULTIPLIER`].
    pub fn with_multiplier(rng: R, multiplier: usize) -> Self {
        Self {
            rng,
            buf: Vec::new(),
            offset: 0,
            multiplier: if multiplier >= 1 {
                multiplier
            } else {
                DEFAULT_MULTIPLIER
            },
        }
    }

    /// Serves `size` fresh random bytes, refilling or reallocating the
    /// buffer as needed.
    ///
    /// The returned slice is never re-served: subsequent calls serve later
    /// regions of the buffer, and a refill overwrites the entire buffer
    /// (discarded bytes included) before the cursor is reused.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the random source fails. The cursor is
    /// left unchanged and no bytes are served.
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
    pub fn acquire(&mut self, size: usize) -> Result<&[u8]> {
        let multiplier = self.multiplier;
        self.acquire_with(size, multiplier)
    }

    /// Like [`Self::acquire`], but `multiplier` sizes the buffer if this
    /// call triggers a reallocation. The pool's own multiplier is unchanged.
    /// A `multiplier` of 0 is treated as 1.
    pub fn acquire_with(&mut self, size: usize, multiplier: usize) -> Result<&[u8]> {
        debug_assert!(size >= 1);
        let multiplier = multiplier.max(1);

        if self.offset + size > self.buf.len() {
            if self.buf.len() < size {
                self.buf = vec![0; size * multiplier];
            }
            // Full refill: the unconsumed tail is overwritten, not reused.
            self.rng.try_fill(&mut self.buf)?;
            self.offset = 0;
        }

        self.offset += size;
        Ok(&self.buf[self.offset - size..self.offset])
    }

    /// Sets the refill multiplier used by subsequent reallocations.
    ///
    /// Values below 1 are ignored, matching the lenient parameter policy of
    /// the generation API.
    pub fn set_multiplier(&mut self, multiplier: usize) {
        if multiplier >= 1 {
            self.multiplier = multiplier;
        }
    }

    /// The current refill multiplier.
    pub fn multiplier(&self) -> usize {
        self.multiplier
    }

    /// The current buffer length in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The consumption cursor: how many bytes have been served since the
    /// last refill.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use core::cell::Cell;

    /// Counts fills and stamps the buffer with a per-fill pattern, so tests
    /// can tell refills and stale bytes apart.
    struct SteppedRand {
        fills: Cell<u8>,
    }

    impl SteppedRand {
        fn new() -> Self {
            Self {
                fills: Cell::new(0),
            }
        }
    }

    impl RandSource for SteppedRand {
        fn try_fill(&self, dst: &mut [u8]) -> Result<()> {
            let generation = self.fills.get() + 1;
            self.fills.set(generation);
            for (i, b) in dst.iter_mut().enumerate() {
                *b = generation.wrapping_mul(100).wrapping_add(i as u8);
            }
            Ok(())
        }
    }

    struct FailingRand;

    impl RandSource for FailingRand {
        fn try_fill(&self, _dst: &mut [u8]) -> Result<()> {
            Err(Error::Entropy {
                reason: "mock failure".into(),
            })
        }
    }

    #[test]
    fn first_acquire_allocates_size_times_multiplier() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 4);
        let bytes = pool.acquire(8).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(pool.capacity(), 32);
        assert_eq!(pool.offset(), 8);
    }

    #[test]
    fn in_window_acquire_advances_without_refill() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 4);
        pool.acquire(8).unwrap();
        assert_eq!(pool.rng.fills.get(), 1);

        let bytes = pool.acquire(8).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(pool.offset(), 16);
        assert_eq!(pool.capacity(), 32);
        // still the first generation: no refill happened
        assert_eq!(pool.rng.fills.get(), 1);
    }

    #[test]
    fn consumed_regions_are_never_reserved() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 4);
        let first: Vec<u8> = pool.acquire(8).unwrap().to_vec();
        let second: Vec<u8> = pool.acquire(8).unwrap().to_vec();
        // same fill generation, disjoint regions of the pattern
        assert_ne!(first, second);
        assert_eq!(first[0], 100);
        assert_eq!(second[0], 108);
    }

    #[test]
    fn exhausted_window_triggers_full_in_place_refill() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 2);
        pool.acquire(8).unwrap(); // capacity 16, offset 8
        pool.acquire(8).unwrap(); // offset 16, window exhausted

        let bytes: Vec<u8> = pool.acquire(8).unwrap().to_vec();
        assert_eq!(pool.rng.fills.get(), 2);
        assert_eq!(pool.capacity(), 16); // refilled in place, not grown
        assert_eq!(pool.offset(), 8);
        // served bytes come from the second generation
        assert_eq!(bytes[0], 200);
    }

    #[test]
    fn refill_discards_unconsumed_tail() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 2);
        pool.acquire(6).unwrap(); // capacity 12, offset 6; tail [6, 12) unconsumed

        // 8 > 12 - 6: tail insufficient, capacity sufficient -> full refill
        let bytes: Vec<u8> = pool.acquire(8).unwrap().to_vec();
        assert_eq!(pool.capacity(), 12);
        assert_eq!(pool.offset(), 8);
        // the serve starts at index 0 of a fresh generation, proving the
        // old tail was overwritten rather than preserved
        assert_eq!(bytes[0], 200);
    }

    #[test]
    fn oversized_request_reallocates() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 3);
        pool.acquire(4).unwrap();
        assert_eq!(pool.capacity(), 12);

        let bytes = pool.acquire(20).unwrap();
        assert_eq!(bytes.len(), 20);
        assert_eq!(pool.capacity(), 60);
        assert_eq!(pool.offset(), 20);
    }

    #[test]
    fn per_call_multiplier_sizes_reallocation_only() {
        let mut pool = RandomPool::with_multiplier(SteppedRand::new(), 8);
        let bytes = pool.acquire_with(4, 2).unwrap();
        assert_eq!(bytes.len(), 4);
        assert_eq!(pool.capacity(), 8);
        // the pool's own multiplier is untouched
        assert_eq!(pool.multiplier(), 8);
    }

    #[test]
    fn set_multiplier_ignores_zero() {
        let mut pool = RandomPool::new(SteppedRand::new());
        pool.set_multiplier(0);
        assert_eq!(pool.multiplier(), DEFAULT_MULTIPLIER);
        pool.set_multiplier(16);
        assert_eq!(pool.multiplier(), 16);
    }

    #[test]
    fn constructor_rejects_zero_multiplier() {
        let pool = RandomPool::with_multiplier(SteppedRand::new(), 0);
        assert_eq!(pool.multiplier(), DEFAULT_MULTIPLIER);
    }

    #[test]
    fn entropy_failure_leaves_cursor_untouched() {
        let mut pool = RandomPool::with_multiplier(FailingRand, 4);
        assert!(matches!(
            pool.acquire(8),
            Err(Error::Entropy { .. })
        ));
        assert_eq!(pool.offset(), 0);
    }
}
