//! Seed representation: per-stream slices, the persisted store, and the
//! portable seed string codec.

pub mod codec;
pub mod slice;
pub mod store;

pub use codec::{decode, encode, expand};
pub use slice::{SEED_SLICE_LEN, SeedSlice};
pub use store::{SEED_SLOT_COUNT, SEED_STORE_FORMAT_VERSION, SEED_STORE_LEN, SeedStore};
