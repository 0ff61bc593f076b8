//! encoding/shuffle.rs
//! Deterministic alphabet permutation from a 32-byte key digest.
//!
//! Design:
//! - The key digest is rendered through *canonical* base64 to get an ASCII
//!   seed string. This is seed expansion, not a secrecy measure.
//! - Seed characters map to numbers 0..63 via the canonical index table;
//!   each `=` folds in the running sum of everything before it mod 64, so
//!   padding position matters.
//! - A 4-word u32 state drives a right-to-left Fisher-Yates shuffle; each
//!   draw is 4 ChaCha-style quarter-rounds followed by an XOR of the words.
//!
//! Determinism is load-bearing: identical number sequences must yield
//! identical permutations across every implementation, byte for byte. All
//! arithmetic is wrapping u32 with left rotations; signed or 64-bit
//! promoted arithmetic silently diverges from the wire contract. Guarded
//! by fixed vectors from an independent implementation in the test suite.

use crate::constants::{BASE_CHARS, KEY_LEN_32, MIN_SHUFFLE_ROUNDS, PAD_BYTE, SHUFFLE_IV};
use crate::encoding::codec::Alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 4-word add-rotate-xor generator state.
struct ArxState([u32; 4]);

impl ArxState {
    /// Seed from the first up-to-4 numbers; remaining words come from the
    /// fixed initialization constants.
    fn from_numbers(numbers: &[u32]) -> Self {
        let mut words = SHUFFLE_IV;
        for (word, &n) in words.iter_mut().zip(numbers) {
            *word = n;
        }
        Self(words)
    }

    #[inline]
    fn quarter_round(&mut self) {
        let [mut a, mut b, mut c, mut d] = self.0;
        a = a.wrapping_add(b); d ^= a; d = d.rotate_left(16);
        c = c.wrapping_add(d); b ^= c; b = b.rotate_left(12);
        a = a.wrapping_add(b); d ^= a; d = d.rotate_left(8);
        c = c.wrapping_add(d); b ^= c; b = b.rotate_left(7);
        self.0 = [a, b, c, d];
    }

    /// Next pseudo-random word: 4 quarter-rounds, then XOR of the state.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        for _ in 0..4 {
            self.quarter_round();
        }
        self.0[0] ^ self.0[1] ^ self.0[2] ^ self.0[3]
    }
}

/// Map seed characters onto numbers 0..63. `=` is not in the alphabet; its
/// value is the running sum of all previously computed numbers mod 64.
fn chars_to_numbers(seed: &str) -> Vec<u32> {
    let canonical = Alphabet::canonical();
    let mut numbers: Vec<u32> = Vec::with_capacity(seed.len());
    let mut running_sum: u32 = 0;

    for &c in seed.as_bytes() {
        let n = if c == PAD_BYTE {
            running_sum % 64
        } else {
            u32::from(canonical.index_of(c))
        };
        running_sum = running_sum.wrapping_add(n);
        numbers.push(n);
    }

    numbers
}

/// Shuffle the canonical alphabet under the given number sequence.
/// `rounds = max(10, numbers.len())`; every round is a full right-to-left
/// Fisher-Yates pass, and after round `r` (while `r < numbers.len()`)
/// `numbers[r]` is XORed into `state[r mod 4]`.
pub fn shuffle(numbers: &[u32]) -> [u8; 64] {
    let mut chars = *BASE_CHARS;
    let mut state = ArxState::from_numbers(numbers);
    let rounds = numbers.len().max(MIN_SHUFFLE_ROUNDS);

    for r in 0..rounds {
        for i in (1..chars.len()).rev() {
            let j = state.next_u32() as usize % (i + 1);
            chars.swap(i, j);
        }
        if r < numbers.len() {
            state.0[r % 4] ^= numbers[r];
        }
    }

    chars
}

/// Derive the full 64-symbol permutation for a 32-byte alphabet key.
pub fn permuted_alphabet(key: &[u8; KEY_LEN_32]) -> [u8; 64] {
    let seed = STANDARD.encode(key);
    shuffle(&chars_to_numbers(&seed))
}
