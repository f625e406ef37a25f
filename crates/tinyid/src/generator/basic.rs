use crate::{
    Alphabet, Error, IdGenerator, IdParams, RandSource, RandomPool, Result,
    generator::state::GeneratorState,
};
use core::cell::RefCell;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A pooled ID generator suitable for single-threaded use.
///
/// This generator keeps its alphabet and byte pool behind a [`RefCell`],
/// giving a `&self` API without any locking. It is intentionally `!Sync`:
/// the pool's serve/refill cursor must never be raced, so sharing across
/// threads is ruled out at the type level. Move it into the thread that
/// owns it, or use one per thread.
///
/// ## Features
///
/// - ✅ No locking overhead
/// - ✅ Probabilistically unique (no coordination required)
/// - ❌ Not thread-safe (single-owner discipline)
///
/// ## Recommended When
///
/// - You're in a single-threaded environment, or can give each thread its
///   own generator
/// - You want the cheapest possible per-ID cost
///
/// ## See Also
/// - [`LockIdGenerator`]
///
/// [`LockIdGenerator`]: crate::LockIdGenerator
#[derive(Debug)]
pub struct BasicIdGenerator<R>
where
    R: RandSource,
{
    state: RefCell<GeneratorState<R>>,
}

impl<R> BasicIdGenerator<R>
where
    R: RandSource,
{
    /// Creates a new [`BasicIdGenerator`] with the default 64-character
    /// URL-safe alphabet and the default pool multiplier.
    ///
    /// # Example
    /// ```
    /// use tinyid::{BasicIdGenerator, ThreadRandom};
    ///
    /// let generator = BasicIdGenerator::new(ThreadRandom);
    /// let id = generator.generate();
    /// assert_eq!(id.chars().count(), 21);
    /// ```
    pub fn new(rng: R) -> Self {
        Self::with_alphabet(Alphabet::default(), rng)
    }

    /// Creates a generator whose default alphabet is `alphabet`.
    pub fn with_alphabet(alphabet: Alphabet, rng: R) -> Self {
        Self {
            state: RefCell::new(GeneratorState::new(alphabet, RandomPool::new(rng))),
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
            state: RefCell::new(GeneratorState::new(
                alphabet,
                RandomPool::with_multiplier(rng, multiplier),
            )),
        }
    }

    /// Generates a new identifier with the generator's defaults.
    ///
    /// Internally calls [`Self::try_generate`] and unwraps the result, so
    /// prefer the fallible version if you want explicit control over error
    /// handling.
    ///
    /// # Panics
    /// Panics if the random source fails. [`ThreadRandom`] never fails.
    ///
    /// [`ThreadRandom`]: crate::ThreadRandom
    pub fn generate(&self) -> String {
        self.try_generate().unwrap()
    }

    /// A fallible version of [`Self::generate`].
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the random source fails.
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
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
    /// Panics if the random source fails.
    ///
    /// # Example
    /// ```
    /// use tinyid::{Alphabet, BasicIdGenerator, IdParams, ThreadRandom};
    ///
    /// let generator = BasicIdGenerator::new(ThreadRandom);
    /// let id = generator.generate_with(
    ///     &IdParams::new().alphabet(Alphabet::new("0123456789abcdef")).size(8),
    /// );
    /// assert_eq!(id.len(), 8);
    /// ```
    pub fn generate_with(&self, params: &IdParams) -> String {
        self.try_generate_with(params).unwrap()
    }

    /// A fallible version of [`Self::generate_with`].
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the random source fails; no bytes are
    /// consumed in that case.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_generate_with(&self, params: &IdParams) -> Result<String> {
        self.state.borrow_mut().generate(params)
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
    /// never do this as a side effect.
    pub fn set_alphabet(&self, alphabet: Alphabet) {
        self.state.borrow_mut().alphabet = alphabet;
    }

    /// Sets the pool's refill multiplier for subsequent reallocations.
    /// Values below 1 are ignored.
    pub fn set_multiplier(&self, multiplier: usize) {
        self.state.borrow_mut().pool.set_multiplier(multiplier);
    }

    /// The generator's current default alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.state.borrow().alphabet.clone()
    }

    /// The pool's current refill multiplier.
    pub fn multiplier(&self) -> usize {
        self.state.borrow().pool.multiplier()
    }
}

impl<R> Default for BasicIdGenerator<R>
where
    R: RandSource + Default,
{
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R> IdGenerator<R> for BasicIdGenerator<R>
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
