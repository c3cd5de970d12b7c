//! Domain error types.

use thiserror::Error;

/// Failure to parse a portable seed string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedParseError {
    /// The string does not have the fixed encoded length.
    #[error("seed string must be {expected} symbols long, got {actual}")]
    InvalidLength {
        /// Required number of symbols.
        expected: usize,
        /// Number of symbols supplied.
        actual: usize,
    },

    /// The string contains a symbol outside the seed alphabet.
    #[error("invalid seed symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based symbol index.
        position: usize,
    },
}

/// Failure to restore a persisted seed store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedStoreError {
    /// The persisted buffer does not have the fixed store size.
    #[error("seed store must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte length.
        expected: usize,
        /// Byte length found.
        actual: usize,
    },

    /// The persisted store was written by an incompatible format generation.
    #[error("unsupported seed store format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version this build reads.
        expected: u32,
        /// Version found in the persisted store.
        found: u32,
    },
}

/// Failure of an entropy source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The platform randomness facility could not be read.
    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}
