//! Stream identities and their slots in the seed store.
//!
//! Slot layout (one 12-byte slice each):
//!
//! | Slots | Streams |
//! |---|---|
//! | 0 | `Master` (birth seed, never sampled) |
//! | 1 | `Main` |
//! | 2..=23 | `Event(_)`, one per gameplay event category |
//! | 24..=151 | `Level(_)`, the per-level bank |
//! | 152..=199 | reserved |
//!
//! `Display` has no slot: it is process-local and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::seed::store::SEED_SLOT_COUNT;

/// Number of streams in the per-level bank.
pub const LEVEL_BANK_SIZE: usize = 128;

/// Slot of the master seed.
pub const MASTER_SLOT: usize = 0;
/// Slot of the main stream.
pub const MAIN_SLOT: usize = 1;
/// First slot of the named event streams.
pub const FIRST_EVENT_SLOT: usize = 2;
/// First slot of the per-level bank.
pub const FIRST_LEVEL_SLOT: usize = FIRST_EVENT_SLOT + EventStream::ALL.len();
/// First slot not assigned to any stream.
pub const FIRST_RESERVED_SLOT: usize = FIRST_LEVEL_SLOT + LEVEL_BANK_SIZE;

const _: () = assert!(FIRST_RESERVED_SLOT <= SEED_SLOT_COUNT);
const _: () = assert!(LEVEL_BANK_SIZE <= u8::MAX as usize + 1);

/// Identity of a random stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    /// Records the seed the store was expanded from. Sampling it is a
    /// caller defect.
    Master,
    /// General-purpose game-logic randomness.
    Main,
    /// Cosmetic randomness that must not influence game logic. Not persisted.
    Display,
    /// A stream dedicated to one category of gameplay event.
    Event(EventStream),
    /// One stream of the per-level bank.
    Level(LevelSlot),
}

impl Stream {
    /// The bank stream for the level with the given ledger number.
    ///
    /// Ledger numbers wrap around the bank, so `level(n)` and
    /// `level(n + LEVEL_BANK_SIZE)` are the same stream.
    #[must_use]
    pub fn level(ledger_number: i32) -> Self {
        Self::Level(LevelSlot::for_ledger(ledger_number))
    }

    /// Slot of this stream in the persisted seed store, or `None` for the
    /// process-local display stream.
    #[must_use]
    pub fn persisted_slot(self) -> Option<usize> {
        match self {
            Self::Master => Some(MASTER_SLOT),
            Self::Main => Some(MAIN_SLOT),
            Self::Display => None,
            Self::Event(event) => Some(FIRST_EVENT_SLOT + event.index()),
            Self::Level(level) => Some(FIRST_LEVEL_SLOT + level.index()),
        }
    }

    /// Every persisted stream, in slot order. Reserved slots are not listed.
    pub fn persisted() -> impl Iterator<Item = Self> {
        [Self::Master, Self::Main]
            .into_iter()
            .chain(EventStream::ALL.into_iter().map(Self::Event))
            .chain((0..LEVEL_BANK_SIZE).map(|i| Self::Level(LevelSlot::from_index(i))))
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Master => f.write_str("master"),
            Self::Main => f.write_str("main"),
            Self::Display => f.write_str("display"),
            Self::Event(event) => write!(f, "event:{}", event.name()),
            Self::Level(level) => write!(f, "level:{}", level.index()),
        }
    }
}

/// Position in the per-level bank. Only constructed by reducing a ledger
/// number modulo [`LEVEL_BANK_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LevelSlot(u8);

impl LevelSlot {
    /// Bank position for a ledger number. Negative ledger numbers wrap the
    /// same way.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    pub fn for_ledger(ledger_number: i32) -> Self {
        // rem_euclid keeps the result in [0, LEVEL_BANK_SIZE).
        Self(ledger_number.rem_euclid(LEVEL_BANK_SIZE as i32) as u8)
    }

    /// Index within the bank, in `[0, LEVEL_BANK_SIZE)`.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Self {
        debug_assert!(index < LEVEL_BANK_SIZE);
        Self(index as u8)
    }
}

impl TryFrom<u8> for LevelSlot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < LEVEL_BANK_SIZE {
            Ok(Self(value))
        } else {
            Err(format!(
                "level slot {value} is outside the bank of {LEVEL_BANK_SIZE}"
            ))
        }
    }
}

impl From<LevelSlot> for u8 {
    fn from(slot: LevelSlot) -> Self {
        slot.0
    }
}

/// Gameplay event categories with a dedicated stream.
///
/// Giving an event its own stream keeps its outcome comparable across games
/// that share a master seed, however much randomness unrelated events
/// consume. Variant order is the slot order and is part of the persisted
/// format: append new categories at the end only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStream {
    /// Overall dungeon structure: branch placement, special level choice.
    DungeonStructure,
    /// Themed room and level flavour selection.
    LevelThemes,
    /// Randomised artifact names.
    ArtifactNames,
    /// Names given to ghosts.
    GhostNames,
    /// Outcome of a wish.
    Wish,
    /// Outcome of prayer.
    Prayer,
    /// Outcome of recharging an item.
    Charging,
    /// Forms chosen by polymorph.
    Polymorph,
    /// Intrinsics gained from eating.
    IntrinsicGain,
    /// Hit points and power gained on level up.
    ExperienceGain,
    /// Gifts granted on crowning.
    Crowning,
    /// Oracle consultations.
    Oracle,
    /// Effects of quaffing from a fountain.
    FountainQuaff,
    /// Effects of interacting with a sink.
    SinkEffect,
    /// Effects of sitting on a throne.
    ThroneEffect,
    /// Trap type selection.
    TrapGeneration,
    /// Altar conversion outcomes.
    AltarConversion,
    /// Whether and which bones files are loaded.
    BonesSelection,
    /// The starting pet's inventory.
    PetInventory,
    /// The hero's starting inventory.
    StartingInventory,
    /// Attribute rolls at character creation.
    CharacterCreation,
    /// Names given to shopkeepers.
    ShopkeeperNames,
}

impl EventStream {
    /// Every category, in slot order.
    pub const ALL: [Self; 22] = [
        Self::DungeonStructure,
        Self::LevelThemes,
        Self::ArtifactNames,
        Self::GhostNames,
        Self::Wish,
        Self::Prayer,
        Self::Charging,
        Self::Polymorph,
        Self::IntrinsicGain,
        Self::ExperienceGain,
        Self::Crowning,
        Self::Oracle,
        Self::FountainQuaff,
        Self::SinkEffect,
        Self::ThroneEffect,
        Self::TrapGeneration,
        Self::AltarConversion,
        Self::BonesSelection,
        Self::PetInventory,
        Self::StartingInventory,
        Self::CharacterCreation,
        Self::ShopkeeperNames,
    ];

    /// Offset of this category from [`FIRST_EVENT_SLOT`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable lowercase name, used in logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DungeonStructure => "dungeon_structure",
            Self::LevelThemes => "level_themes",
            Self::ArtifactNames => "artifact_names",
            Self::GhostNames => "ghost_names",
            Self::Wish => "wish",
            Self::Prayer => "prayer",
            Self::Charging => "charging",
            Self::Polymorph => "polymorph",
            Self::IntrinsicGain => "intrinsic_gain",
            Self::ExperienceGain => "experience_gain",
            Self::Crowning => "crowning",
            Self::Oracle => "oracle",
            Self::FountainQuaff => "fountain_quaff",
            Self::SinkEffect => "sink_effect",
            Self::ThroneEffect => "throne_effect",
            Self::TrapGeneration => "trap_generation",
            Self::AltarConversion => "altar_conversion",
            Self::BonesSelection => "bones_selection",
            Self::PetInventory => "pet_inventory",
            Self::StartingInventory => "starting_inventory",
            Self::CharacterCreation => "character_creation",
            Self::ShopkeeperNames => "shopkeeper_names",
        }
    }
}
