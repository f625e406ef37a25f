use crate::{IdParams, RandSource};
use core::fmt;

/// A minimal interface for pooled ID generators.
pub trait IdGenerator<R>
where
    R: RandSource,
{
    type Err: fmt::Debug;

    /// Creates a generator with the default alphabet and multiplier.
    fn new(rng: R) -> Self;

    /// Returns a new identifier using the generator's defaults.
    fn generate(&self) -> String;

    /// A fallible version of [`Self::generate`] that returns a [`Result`].
    ///
    /// # Errors
    /// - May return an error if the random source fails, or if the
    ///   underlying generator uses a lock and it is poisoned.
    ///
    /// [`Result`]: crate::Result
    fn try_generate(&self) -> Result<String, Self::Err>;

    /// Returns a new identifier with per-call overrides applied.
    fn generate_with(&self, params: &IdParams) -> String;

    /// A fallible version of [`Self::generate_with`].
    fn try_generate_with(&self, params: &IdParams) -> Result<String, Self::Err>;
}
