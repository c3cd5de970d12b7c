//! Runeseed Core — shared abstractions for the random-number engine.
//!
//! This crate defines the traits and error types that the engine and its
//! consumers depend on. It contains no infrastructure code.

pub mod clock;
pub mod entropy;
pub mod error;
pub mod rng;
