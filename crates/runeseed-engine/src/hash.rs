//! SHA-256 block hash used to mix stream seeds.
//!
//! The engine owns the message framing (IV, padding, length encoding, word
//! extraction); the 64-round compression itself is `sha2::compress256`.

use sha2::digest::consts::U64;
use sha2::digest::generic_array::GenericArray;

/// Size of one compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Largest tail that still fits padding and length in a single final block.
const MAX_SINGLE_BLOCK_TAIL: usize = BLOCK_LEN - 1 - 8;

/// SHA-256 initial hash value.
const IV: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

/// A digest: the eight 32-bit state words after the final block.
pub type Digest = [u32; 8];

/// Hashes `input` and returns the final state words.
///
/// The words are the digest bytes read big-endian, so `digest(b"abc")[0]`
/// is `0xba78_16bf`.
#[must_use]
pub fn digest(input: &[u8]) -> Digest {
    let mut state = IV;

    let full_blocks = input.len() / BLOCK_LEN;
    let (body, tail) = input.split_at(full_blocks * BLOCK_LEN);
    for block in body.chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    // Final one or two blocks: tail, a single set bit, zeros, bit length.
    let mut last = [0u8; BLOCK_LEN * 2];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = 0x80;
    let final_len = if tail.len() <= MAX_SINGLE_BLOCK_TAIL {
        BLOCK_LEN
    } else {
        BLOCK_LEN * 2
    };
    let bit_len = (input.len() as u64).wrapping_mul(8);
    last[final_len - 8..final_len].copy_from_slice(&bit_len.to_be_bytes());
    for block in last[..final_len].chunks_exact(BLOCK_LEN) {
        compress(&mut state, block);
    }

    state
}

/// Hashes `input` and returns the conventional 32-byte big-endian form.
#[must_use]
pub fn digest_bytes(input: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(digest(input)) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

fn compress(state: &mut [u32; 8], block: &[u8]) {
    let block: &GenericArray<u8, U64> = GenericArray::from_slice(block);
    sha2::compress256(state, std::slice::from_ref(block));
}
