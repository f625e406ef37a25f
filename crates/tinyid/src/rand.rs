use crate::Result;

/// A source of cryptographically secure random bytes.
///
/// This abstraction allows you to plug in the thread-local CSPRNG, the OS
/// entropy source, or a mocked source in tests.
///
/// # Example
///
/// ```
/// use tinyid::RandSource;
///
/// struct FixedBytes;
/// impl RandSource for FixedBytes {
///     fn try_fill(&self, dst: &mut [u8]) -> tinyid::Result<()> {
///         dst.fill(0x2A);
///         Ok(())
///     }
/// }
///
/// let mut buf = [0u8; 4];
/// FixedBytes.try_fill(&mut buf).unwrap();
/// assert_eq!(buf, [0x2A; 4]);
/// ```
pub trait RandSource {
    /// Fills `dst` entirely with fresh random bytes.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the underlying source fails. On error,
    /// the contents of `dst` are unspecified and must not be used.
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
    fn try_fill(&self, dst: &mut [u8]) -> Result<()>;
}
