//! Portable seed strings and master-seed expansion.
//!
//! A seed string is 16 symbols over a 64-symbol alphabet: every 3 bytes of
//! the 12-byte master seed become 4 symbols of 6 bits, most significant
//! first.

use std::fmt;
use std::str::FromStr;

use runeseed_core::error::SeedParseError;

use super::slice::{SEED_SLICE_LEN, SeedSlice};
use super::store::{SEED_SLOT_COUNT, SeedStore};

/// Seed string alphabet, in symbol-value order.
pub const SEED_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// Number of symbols in an encoded seed.
pub const SEED_STRING_LEN: usize = SEED_SLICE_LEN / 3 * 4;

const INVALID: u8 = 0xff;

#[allow(clippy::cast_possible_truncation)]
const SYMBOL_VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < SEED_ALPHABET.len() {
        table[SEED_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes a master seed as its portable string.
#[must_use]
pub fn encode(master: &SeedSlice) -> String {
    let mut out = String::with_capacity(SEED_STRING_LEN);
    for group in master.as_bytes().chunks_exact(3) {
        let bits =
            (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2]);
        for shift in [18, 12, 6, 0] {
            out.push(char::from(SEED_ALPHABET[((bits >> shift) & 0x3f) as usize]));
        }
    }
    out
}

/// Parses a portable seed string back into a master seed.
///
/// # Errors
///
/// Returns `SeedParseError::InvalidLength` if `s` is not exactly
/// [`SEED_STRING_LEN`] symbols, or `SeedParseError::InvalidSymbol` for the
/// first symbol outside [`SEED_ALPHABET`].
pub fn decode(s: &str) -> Result<SeedSlice, SeedParseError> {
    let symbols: Vec<char> = s.chars().collect();
    if symbols.len() != SEED_STRING_LEN {
        return Err(SeedParseError::InvalidLength {
            expected: SEED_STRING_LEN,
            actual: symbols.len(),
        });
    }

    let mut bytes = [0u8; SEED_SLICE_LEN];
    for (group_index, group) in symbols.chunks_exact(4).enumerate() {
        let mut bits = 0u32;
        for (offset, &symbol) in group.iter().enumerate() {
            let value = symbol_value(symbol).ok_or(SeedParseError::InvalidSymbol {
                symbol,
                position: group_index * 4 + offset,
            })?;
            bits = (bits << 6) | u32::from(value);
        }
        let [_, b0, b1, b2] = bits.to_be_bytes();
        bytes[group_index * 3..group_index * 3 + 3].copy_from_slice(&[b0, b1, b2]);
    }
    Ok(SeedSlice::from_bytes(bytes))
}

fn symbol_value(symbol: char) -> Option<u8> {
    let index = usize::try_from(u32::from(symbol)).ok()?;
    SYMBOL_VALUES
        .get(index)
        .copied()
        .filter(|&value| value != INVALID)
}

/// Expands a master seed into a full store.
///
/// Every slot starts as a copy of the master with its slot index (mod 256)
/// added into the most significant byte. Slots differ in one byte only; the
/// hash spreads that difference when the streams are sampled.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn expand(master: SeedSlice) -> SeedStore {
    let mut store = SeedStore::filled(master);
    for index in 0..SEED_SLOT_COUNT {
        store.slot_mut(index).add_to_top_byte(index as u8);
    }
    store
}

impl fmt::Display for SeedSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for SeedSlice {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
