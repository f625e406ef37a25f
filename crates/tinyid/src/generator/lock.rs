use crate::{
    Alphabet, Error, IdGenerator, IdParams, RandSource, RandomPool, Result,
    generator::mutex::{Mutex, MutexGuard},
    generator::state::GeneratorState,
};
use std::sync::Arc;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A pooled ID generator suitable for multi-threaded environments.
///
/// This generator wraps its alphabet and byte pool in an `Arc<Mutex<_>>`,
/// allowing safe shared use across threads. Parameter resolution, the pool
/// serve, and encoding all happen under a single lock hold, so two threads
/// can never observe overlapping byte ranges or a torn configuration
/// update.
///
/// Cloning is cheap and shares the same pool.
///
/// ## Features
///
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Shared pool amortization across all clones
///
/// ## Recommended When
///
/// - You're in a multi-threaded environment
/// - You want one pool's amortization shared by many callers
///
/// ## See Also
/// - [`BasicIdGenerator`]
///
/// [`BasicIdGenerator`]: crate::BasicIdGenerator
#[derive(Debug)]
pub struct LockIdGenerator<R>
where
    R: RandSource,
{
    state: Arc<Mutex<GeneratorState<R>>>,
}

impl<R> Clone for LockIdGenerator<R>
where
    R: RandSource,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R> LockIdGenerator<R>
where
    R: RandSource,
{
    /// Creates a new [`LockIdGenerator`] with the default 64-character
    /// URL-safe alphabet and the default pool multiplier.
    ///
    /// # Example
    /// ```
    /// use tinyid::{LockIdGenerator, ThreadRandom};
    ///
    /// let generator = LockIdGenerator::new(ThreadRandom);
    /// let id = generator.generate();
    /// assert_eq!(id.chars().count(), 21);
    /// ```
    pub fn new(rng: R) -> Self {
        Self::with_alphabet(Alphabet::default(), rng)
    }

    /// Creates a generator whose default alphabet is `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet, rng: R) -> Self {
        Self {
            state: Arc::new(Mutex::new(GeneratorState::new(
                alphabet,
                RandomPool::new(rng),
            ))),
        }
    }

    /// Creates a generator configured from `params`.
    ///
    /// The `alphabet` and `multiplier` options become the generator's
    /// defaults; `size` is a per-call option and is ignored here.
    pub fn with_params(params: &IdParams, rng: R) -> Self {
        let alphabet = params.alphabet_ref().cloned().unwrap_or_default();
        let multiplier = params.resolved_multiplier(crate::DEFAULT_MULTIPLIER);
        Self {
            state: Arc::new(Mutex::new(GeneratorState::new(
                alphabet,
                RandomPool::with_multiplier(rng, multiplier),
            ))),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, GeneratorState<R>>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }

    /// Generates a new identifier with the generator's defaults.
    ///
    /// Internally calls [`Self::try_generate`] and unwraps the result, so
    /// prefer the fallible version if you want explicit control over error
    /// handling.
    ///
    /// # Panics
    /// Panics if the random source fails or the lock is poisoned.
    pub fn generate(&self) -> String {
        self.try_generate().unwrap()
    }

    /// A fallible version of [`Self::generate`].
    ///
    /// # Errors
    /// - Returns [`Error::Entropy`] if the random source fails.
    /// - Returns [`Error::LockPoisoned`] if another thread panicked while
    ///   holding the lock (std mutex builds only).
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn try_generate(&self) -> Result<String> {
        self.try_generate_with(&IdParams::default())
    }

    /// Generates a new identifier with per-call overrides.
    ///
    /// Overrides apply to this call only; the generator's defaults are
    /// never modified. Invalid options (zero `size` or `multiplier`) fall
    /// back to defaults under the compatible policy; use
    /// [`Self::try_generate_strict`] to reject them instead.
    ///
    /// # Panics
    /// Panics if the random source fails or the lock is poisoned.
    pub fn generate_with(&self, params: &IdParams) -> String {
        self.try_generate_with(params).unwrap()
    }

    /// A fallible version of [`Self::generate_with`].
    ///
    /// The lock is held for the whole resolve-acquire-encode sequence.
    ///
    /// # Errors
    /// Same conditions as [`Self::try_generate`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_generate_with(&self, params: &IdParams) -> Result<String> {
        self.lock_state()?.generate(params)
    }

    /// Like [`Self::try_generate_with`], but rejects invalid parameters
    /// with [`Error::InvalidParameter`] before any randomness is consumed.
    ///
    /// [`Error::InvalidParameter`]: crate::Error::InvalidParameter
    pub fn try_generate_strict(&self, params: &IdParams) -> Result<String> {
        params.validate()?;
        self.try_generate_with(params)
    }

    /// Replaces the generator's default alphabet.
    ///
    /// This is the explicit way to persist a new default; generation calls
    /// never do this as a side effect. The change is visible to all clones.
    ///
    /// # Errors
    /// Returns [`Error::LockPoisoned`] on std mutex builds if the lock is
    /// poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn set_alphabet(&self, alphabet: Alphabet) -> Result<()> {
        self.lock_state()?.alphabet = alphabet;
        Ok(())
    }

    /// Sets the pool's refill multiplier for subsequent reallocations.
    /// Values below 1 are ignored. The change is visible to all clones.
    ///
    /// # Errors
    /// Returns [`Error::LockPoisoned`] on std mutex builds if the lock is
    /// poisoned.
    ///
    /// [`Error::LockPoisoned`]: crate::Error::LockPoisoned
    pub fn set_multiplier(&self, multiplier: usize) -> Result<()> {
        self.lock_state()?.pool.set_multiplier(multiplier);
        Ok(())
    }

    /// The generator's current default alphabet.
    pub fn alphabet(&self) -> Result<Alphabet> {
        Ok(self.lock_state()?.alphabet.clone())
    }

    /// The pool's current refill multiplier.
    pub fn multiplier(&self) -> Result<usize> {
        Ok(self.lock_state()?.pool.multiplier())
    }
}

impl<R> Default for LockIdGenerator<R>
where
    R: RandSource + Default,
{
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> IdGenerator<R> for LockIdGenerator<R>
where
    R: RandSource,
{
    type Err = Error;

    fn new(rng: R) -> Self {
        Self::new(rng)
    }

    fn generate(&self) -> String {
        self.generate()
    }

    fn try_generate(&self) -> Result<String> {
        self.try_generate()
    }

    fn generate_with(&self, params: &IdParams) -> String {
        self.generate_with(params)
    }

    fn try_generate_with(&self, params: &IdParams) -> Result<String> {
        self.try_generate_with(params)
    }
}
