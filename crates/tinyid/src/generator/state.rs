use crate::{Alphabet, IdParams, RandSource, RandomPool, Result};

/// The state every generator owns: the default alphabet and the random byte
/// pool. Generators differ only in how they guard it (`RefCell` vs mutex).
#[derive(Debug)]
pub(crate) struct GeneratorState<R> {
    pub(crate) alphabet: Alphabet,
    pub(crate) pool: RandomPool<R>,
}

impl<R> GeneratorState<R>
where
    R: RandSource,
{
    pub(crate) fn new(alphabet: Alphabet, pool: RandomPool<R>) -> Self {
        Self { alphabet, pool }
    }

    /// Resolve params, acquire bytes, encode. Callers must hold this state
    /// exclusively for the whole call so the serve cannot overlap another.
    pub(crate) fn generate(&mut self, params: &IdParams) -> Result<String> {
        let size = params.resolved_size();
        let multiplier = params.resolved_multiplier(self.pool.multiplier());
        let bytes = self.pool.acquire_with(size, multiplier)?;
        let alphabet = params.alphabet_ref().unwrap_or(&self.alphabet);
        Ok(alphabet.encode(bytes))
    }
}
