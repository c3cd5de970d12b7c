//! The process-local display stream.

use crate::sampler::draw_from_slice;
use crate::seed::SeedSlice;

/// Cosmetic randomness for things that must never influence game logic
/// (hallucinated glyphs, flavour text).
///
/// It is sampled like any other stream but is not part of the seed store:
/// every session starts it from [`DisplayStream::DEFAULT_SEED`] and it is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayStream {
    slice: SeedSlice,
}

impl DisplayStream {
    /// Seed the display stream starts from.
    pub const DEFAULT_SEED: SeedSlice = SeedSlice::ZERO;

    /// A display stream at its default seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slice: Self::DEFAULT_SEED,
        }
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive.
    pub fn draw(&mut self, bound: i32) -> i32 {
        draw_from_slice(&mut self.slice, bound)
    }

    /// Current position of the stream.
    #[must_use]
    pub fn slice(&self) -> SeedSlice {
        self.slice
    }
}

impl Default for DisplayStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_streams_repeat_the_same_sequence() {
        let mut first = DisplayStream::new();
        let mut second = DisplayStream::default();
        let a: Vec<i32> = (0..8).map(|_| first.draw(10)).collect();
        let b: Vec<i32> = (0..8).map(|_| second.draw(10)).collect();
        assert_eq!(a, [0, 7, 7, 5, 1, 3, 5, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_advances_slice() {
        let mut stream = DisplayStream::new();
        stream.draw(3);
        assert_eq!(stream.slice(), DisplayStream::DEFAULT_SEED.advanced_by(1));
    }
}
