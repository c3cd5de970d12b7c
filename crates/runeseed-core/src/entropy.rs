//! Entropy source abstraction.
//!
//! The primary collector is the platform CSPRNG; tests inject fixed or
//! failing sources instead.

use crate::error::EntropyError;

/// A best-effort source of true randomness.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `EntropyError::Unavailable` if the facility cannot be read.
    /// The contents of `buf` are unspecified on error.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;
}
