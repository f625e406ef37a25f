//! Thread-local ID generation utilities.
//!
//! Provides the package-level entry points: each thread lazily owns a
//! [`BasicIdGenerator`] over the thread-local CSPRNG, so calls are
//! contention-free and each thread amortizes its own pool.
//!
//! # Example
//! ```rust
//! use tinyid::tinyid;
//!
//! let id = tinyid();
//! assert_eq!(id.chars().count(), 21);
//! ```

use crate::{BasicIdGenerator, IdParams, ThreadRandom};

thread_local! {
    /// A thread-local pooled generator with the default alphabet.
    static LOCAL_GENERATOR: BasicIdGenerator<ThreadRandom> =
        BasicIdGenerator::new(ThreadRandom);
}

/// Generates a 21-character identifier over the default URL-safe alphabet.
///
/// Uses the calling thread's pooled generator; never fails because
/// [`ThreadRandom`] is infallible.
///
/// # Example
/// ```rust
/// use tinyid::tinyid;
///
/// let id = tinyid();
/// assert_eq!(id.chars().count(), 21);
/// ```
pub fn tinyid() -> String {
    LOCAL_GENERATOR.with(|g| g.generate())
}

/// Generates an identifier of `size` characters over the default URL-safe
/// alphabet.
///
/// A `size` of 0 falls back to the default length of 21, matching the
/// lenient parameter policy of the generation API.
///
/// # Example
/// ```rust
/// use tinyid::tinyid_with;
///
/// let id = tinyid_with(8);
/// assert_eq!(id.chars().count(), 8);
/// ```
pub fn tinyid_with(size: usize) -> String {
    LOCAL_GENERATOR.with(|g| g.generate_with(&IdParams::new().size(size)))
}
