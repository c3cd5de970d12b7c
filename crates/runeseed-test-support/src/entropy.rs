//! Test entropy — deterministic `EntropySource` implementations for tests.

use runeseed_core::entropy::EntropySource;
use runeseed_core::error::EntropyError;

/// An entropy source that repeats a fixed byte pattern. Records how many
/// times it was read.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
    reads: usize,
}

impl FixedEntropy {
    /// Create a source that fills buffers by cycling through `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty.
    #[must_use]
    pub fn new(pattern: Vec<u8>) -> Self {
        assert!(!pattern.is_empty(), "FixedEntropy needs a non-empty pattern");
        Self { pattern, reads: 0 }
    }

    /// Number of `fill` calls served so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl EntropySource for FixedEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        for (dst, src) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
            *dst = *src;
        }
        self.reads += 1;
        Ok(())
    }
}

/// An entropy source that is always unavailable. Scribbles over the buffer
/// before failing so callers cannot rely on partial output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        buf.fill(0xA5);
        Err(EntropyError::Unavailable("no entropy device".to_owned()))
    }
}
