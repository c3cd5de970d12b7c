//! The persisted seed store: one slice per persisted stream.

use std::fmt;

use runeseed_core::error::SeedStoreError;
use serde::{Deserialize, Serialize};

use super::slice::{SEED_SLICE_LEN, SeedSlice};
use crate::stream::{MASTER_SLOT, Stream};

/// Number of slices in a store, reserved slots included.
pub const SEED_SLOT_COUNT: usize = 200;

/// Total persisted size of a store in bytes.
pub const SEED_STORE_LEN: usize = SEED_SLICE_LEN * SEED_SLOT_COUNT;

/// Generation of the persisted layout. Changing the slot count or slice
/// size requires a new version and a migration.
pub const SEED_STORE_FORMAT_VERSION: u32 = 1;

/// Every persisted stream's current seed.
///
/// The store is saved and restored verbatim with the rest of the game
/// state; there is no rebuild step on load.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedSeedStore", into = "PersistedSeedStore")]
pub struct SeedStore {
    slots: [SeedSlice; SEED_SLOT_COUNT],
}

impl SeedStore {
    /// A store whose slots are all `slice`.
    #[must_use]
    pub fn filled(slice: SeedSlice) -> Self {
        Self {
            slots: [slice; SEED_SLOT_COUNT],
        }
    }

    /// The seed the store was expanded from.
    #[must_use]
    pub fn master(&self) -> SeedSlice {
        self.slots[MASTER_SLOT]
    }

    /// Current seed of `stream`, or `None` for streams that are not
    /// persisted.
    #[must_use]
    pub fn get(&self, stream: Stream) -> Option<SeedSlice> {
        stream.persisted_slot().map(|slot| self.slots[slot])
    }

    /// Current seed of the slot at `index`, reserved slots included.
    ///
    /// # Panics
    ///
    /// Panics if `index >= SEED_SLOT_COUNT`.
    #[must_use]
    pub fn slot(&self, index: usize) -> SeedSlice {
        self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut SeedSlice {
        &mut self.slots[index]
    }

    /// Iterates over every slot in order.
    pub fn slots(&self) -> impl Iterator<Item = &SeedSlice> {
        self.slots.iter()
    }

    /// The raw persisted layout: slot 0 first, each slice little-endian.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.slots
            .iter()
            .flat_map(|slice| slice.as_bytes().iter().copied())
            .collect()
    }

    /// Restores a store from its raw persisted layout.
    ///
    /// # Errors
    ///
    /// Returns `SeedStoreError::InvalidLength` if `bytes` is not exactly
    /// [`SEED_STORE_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SeedStoreError> {
        if bytes.len() != SEED_STORE_LEN {
            return Err(SeedStoreError::InvalidLength {
                expected: SEED_STORE_LEN,
                actual: bytes.len(),
            });
        }

        let mut store = Self::filled(SeedSlice::ZERO);
        for (slot, chunk) in store.slots.iter_mut().zip(bytes.chunks_exact(SEED_SLICE_LEN)) {
            let mut raw = [0u8; SEED_SLICE_LEN];
            raw.copy_from_slice(chunk);
            *slot = SeedSlice::from_bytes(raw);
        }
        Ok(store)
    }
}

impl fmt::Debug for SeedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedStore")
            .field("master", &self.master())
            .field("slots", &SEED_SLOT_COUNT)
            .finish()
    }
}

/// On-disk form of a [`SeedStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSeedStore {
    version: u32,
    bytes: Vec<u8>,
}

impl From<SeedStore> for PersistedSeedStore {
    fn from(store: SeedStore) -> Self {
        Self {
            version: SEED_STORE_FORMAT_VERSION,
            bytes: store.to_bytes(),
        }
    }
}

impl TryFrom<PersistedSeedStore> for SeedStore {
    type Error = SeedStoreError;

    fn try_from(persisted: PersistedSeedStore) -> Result<Self, Self::Error> {
        if persisted.version != SEED_STORE_FORMAT_VERSION {
            return Err(SeedStoreError::UnsupportedVersion {
                expected: SEED_STORE_FORMAT_VERSION,
                found: persisted.version,
            });
        }
        Self::from_bytes(&persisted.bytes)
    }
}
