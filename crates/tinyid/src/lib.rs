//! Short, URL-safe random IDs from a pooled secure random source.
//!
//! Randomness acquisition is amortized across many generations: a
//! [`RandomPool`] pre-fetches `size × multiplier` bytes per refill and
//! serves consecutive slices until exhausted. Each random byte is mapped to
//! an [`Alphabet`] character by masking, which is uniform for power-of-two
//! alphabet lengths (the default alphabet has 64 characters).
//!
//! Use [`tinyid()`] for one-off IDs, [`BasicIdGenerator`] for a
//! single-threaded pool, or [`LockIdGenerator`] to share one pool across
//! threads.

mod alphabet;
mod error;
mod generator;
mod params;
mod pool;
mod rand;
mod random_native;
#[cfg(feature = "serde")]
mod serde;

pub use crate::alphabet::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::params::*;
pub use crate::pool::*;
pub use crate::rand::*;
pub use crate::random_native::*;
