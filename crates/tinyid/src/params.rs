use crate::{Alphabet, Error, Result};

/// Default identifier length in characters.
pub const DEFAULT_SIZE: usize = 21;

/// Per-call configuration for ID generation.
///
/// All options are optional; unset fields fall back to the generator's
/// current defaults. Under the compatible (lenient) policy, explicitly-set
/// invalid values (`size` or `multiplier` of 0) are treated as unset rather
/// than rejected. [`Self::validate`] is the strict opt-in that rejects them
/// instead, before any randomness is consumed.
///
/// Overrides apply to a single call only: passing params to a generation
/// method never changes the generator's defaults. Use the generator's
/// `set_alphabet` / `set_multiplier` operations to persist new defaults.
///
/// # Example
/// ```
/// use tinyid::{Alphabet, IdParams};
///
/// let params = IdParams::new()
///     .alphabet(Alphabet::new("0123456789abcdef"))
///     .size(8);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdParams {
    alphabet: Option<Alphabet>,
    multiplier: Option<usize>,
    size: Option<usize>,
}

impl IdParams {
    /// Creates an empty parameter set; every option falls back to the
    /// generator's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the alphabet for this call.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Overrides the pool refill multiplier for this call.
    ///
    /// Only takes effect if the call triggers a pool reallocation.
    pub fn multiplier(mut self, multiplier: usize) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// Overrides the identifier length for this call.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Strict validation: rejects explicitly-set zero values.
    ///
    /// Generators call this from their `try_generate_strict` entry points
    /// before touching the pool, so an invalid call consumes no randomness.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `size` or `multiplier` is set
    /// to 0.
    pub fn validate(&self) -> Result<()> {
        if self.size == Some(0) {
            return Err(Error::InvalidParameter {
                reason: "size must be at least 1".into(),
            });
        }
        if self.multiplier == Some(0) {
            return Err(Error::InvalidParameter {
                reason: "multiplier must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn alphabet_ref(&self) -> Option<&Alphabet> {
        self.alphabet.as_ref()
    }

    pub(crate) fn resolved_size(&self) -> usize {
        self.size.filter(|s| *s >= 1).unwrap_or(DEFAULT_SIZE)
    }

    pub(crate) fn resolved_multiplier(&self, default: usize) -> usize {
        self.multiplier.filter(|m| *m >= 1).unwrap_or(default)
    }
}
