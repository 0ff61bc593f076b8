//! encoding/codec.rs
//! Base64-style 3-byte-to-4-symbol transcoder over an arbitrary alphabet.
//!
//! Identical in structure to standard base64 (24-bit groups split into four
//! 6-bit values, literal `=` padding) but indexed through a permuted
//! alphabet. With the canonical alphabet this reproduces standard base64
//! byte for byte, which is what bypassed mode relies on.
//!
//! Decode is deliberately lenient: a symbol absent from the alphabet maps
//! to value 0 instead of raising an error. Corruption propagates silently
//! through this layer and is caught by tag verification in the cipher
//! engine. Do not tighten this without re-deriving the wire contract.

use crate::constants::{BASE_CHARS, PAD_BYTE};

/// An ordered 64-symbol alphabet plus its inverse lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: [u8; 64],
    inverse: [u8; 256],
}

impl Alphabet {
    /// The standard base64 ordering.
    pub fn canonical() -> Self {
        Self::from_chars(*BASE_CHARS)
    }

    /// Build an alphabet from an explicit symbol ordering. The caller is
    /// responsible for `chars` being a permutation of the canonical set;
    /// the shuffle engine guarantees that for derived alphabets.
    pub fn from_chars(chars: [u8; 64]) -> Self {
        let mut inverse = [0u8; 256];
        for (i, &c) in chars.iter().enumerate() {
            inverse[c as usize] = i as u8;
        }
        Self { chars, inverse }
    }

    /// The symbol ordering as bytes.
    pub fn chars(&self) -> &[u8; 64] {
        &self.chars
    }

    /// 6-bit value of `symbol`, with the silent-zero fallback for symbols
    /// outside the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> u8 {
        self.inverse[symbol as usize]
    }

    /// Encode `data` into text over this alphabet using standard base64
    /// grouping and padding rules.
    pub fn encode(&self, data: &[u8]) -> String {
        // Alphabet symbols and '=' are all ASCII.
        let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

        for chunk in data.chunks(3) {
            let b0 = u32::from(chunk[0]);
            let b1 = chunk.get(1).copied().map_or(0, u32::from);
            let b2 = chunk.get(2).copied().map_or(0, u32::from);
            let combined = (b0 << 16) | (b1 << 8) | b2;

            out.push(self.chars[(combined >> 18) as usize & 63] as char);
            out.push(self.chars[(combined >> 12) as usize & 63] as char);
            match chunk.len() {
                1 => {
                    out.push(PAD_BYTE as char);
                    out.push(PAD_BYTE as char);
                }
                2 => {
                    out.push(self.chars[(combined >> 6) as usize & 63] as char);
                    out.push(PAD_BYTE as char);
                }
                _ => {
                    out.push(self.chars[(combined >> 6) as usize & 63] as char);
                    out.push(self.chars[combined as usize & 63] as char);
                }
            }
        }

        out
    }

    /// Decode `text` back into bytes. Trailing `=` padding is stripped;
    /// each 4-symbol group yields 3 bytes, a trailing 3-symbol group 2
    /// bytes, a trailing 2-symbol group 1 byte. Never fails: unknown
    /// symbols decode as 0 and authentication rejects the result later.
    pub fn decode(&self, text: &str) -> Vec<u8> {
        let stripped = text.trim_end_matches(PAD_BYTE as char).as_bytes();
        let mut out = Vec::with_capacity(stripped.len() / 4 * 3 + 2);

        for group in stripped.chunks(4) {
            let mut combined = 0u32;
            for (k, &symbol) in group.iter().enumerate() {
                combined |= u32::from(self.index_of(symbol)) << (18 - 6 * k);
            }

            out.push((combined >> 16) as u8);
            if group.len() >= 3 {
                out.push((combined >> 8) as u8);
            }
            if group.len() == 4 {
                out.push(combined as u8);
            }
        }

        out
    }
}
