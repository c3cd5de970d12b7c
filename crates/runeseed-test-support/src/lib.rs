//! Shared test doubles and utilities for the Runeseed engine.

mod clock;
mod entropy;
mod rng;

pub use clock::FixedClock;
pub use entropy::{FailingEntropy, FixedEntropy};
pub use rng::{MockRng, SequenceRng};
