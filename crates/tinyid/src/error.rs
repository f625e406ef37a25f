//! Error types for pooled ID generation.
//!
//! This module defines the central `Error` enum, which captures every
//! reportable failure in the ID generation pipeline.
//!
//! ## Error Cases
//! - `Entropy`: The secure random source failed to produce bytes.
//! - `InvalidParameter`: A caller-supplied parameter failed strict
//!   validation.
//! - `EmptyAlphabet`: An alphabet with no characters was supplied.
//! - `LockPoisoned`: A shared generator lock was poisoned by a panicking
//!   thread (std mutex builds only).

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for pooled ID generation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The secure random source failed to fill the pool.
    ///
    /// Entropy failure is never silently ignored: a failed fill leaves the
    /// pool cursor untouched and no bytes are served.
    #[error("entropy source failure: {reason}")]
    Entropy { reason: String },

    /// A parameter was rejected by strict validation.
    ///
    /// Only produced by [`IdParams::validate`] and the `try_generate_strict`
    /// entry points; the compatible (lenient) paths fall back to defaults
    /// instead.
    ///
    /// [`IdParams::validate`]: crate::IdParams::validate
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// An alphabet with no characters was supplied.
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    /// The operation failed because the generator lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

impl From<rand::rand_core::OsError> for Error {
    fn from(err: rand::rand_core::OsError) -> Self {
        Self::Entropy {
            reason: err.to_string(),
        }
    }
}

#[cfg(not(feature = "parking-lot"))]
use std::sync::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
