//! Runeseed Engine — multi-stream deterministic random numbers.
//!
//! Every chance-based event in the game draws from one of many independent
//! streams. Each stream is a 96-bit counter in a fixed-size seed store;
//! drawing hashes the counter with SHA-256, advances it by one, and maps the
//! digest into the requested range without modulo bias. The store is
//! expanded from a 12-byte master seed that can be written down as a
//! 16-symbol string and replayed on any platform.
//!
//! # Modules
//!
//! - **hash**: SHA-256 framing over `sha2`'s compression function
//! - **entropy**: world-birth entropy (OS CSPRNG XOR wall clock)
//! - **seed**: slices, the persisted store, the seed string codec
//! - **stream**: stream identities and the per-level bank
//! - **sampler**: bias-free bounded draws
//! - **distributions**: dice, geometric counts, luck adjustment
//! - **session**: `RngSession`, the context a game session owns

pub mod display;
pub mod distributions;
pub mod entropy;
pub mod hash;
pub mod sampler;
pub mod seed;
pub mod session;
pub mod stream;

pub use display::DisplayStream;
pub use entropy::{Entropy, OsEntropy, collect_entropy};
pub use seed::{SeedSlice, SeedStore};
pub use session::{RngSession, StreamRng};
pub use stream::{EventStream, LEVEL_BANK_SIZE, LevelSlot, Stream};
