//! constants.rs
//! Fixed protocol values shared by the codec, shuffle, and cipher layers.
//!
//! Every constant here is part of the cross-implementation wire contract.
//! Changing any of them breaks compatibility with other compliant
//! implementations; update all sides and the fixed vectors together.

/// Canonical base64 alphabet in standard order.
/// The permuted alphabet is always a reordering of exactly these 64 bytes.
pub const BASE_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Literal padding character; never permuted.
pub const PAD_BYTE: u8 = b'=';

/// Derived key length (SHA-256 digest / AES-256 key).
pub const KEY_LEN_32: usize = 32;

/// Standard 12-byte nonce length for AES-GCM.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// Wire overhead: nonce(12) + tag(16). Ciphertext length equals plaintext
/// length, so `wire_len = WIRE_OVERHEAD + plaintext_len` exactly.
pub const WIRE_OVERHEAD: usize = NONCE_LEN_12 + TAG_LEN;

/// Digest memoization capacity (LRU).
pub const HASH_CACHE_CAPACITY: usize = 100;

/// Constructed-cipher cache capacity (LRU). Only about one key is live per
/// calendar day, so this rarely evicts; it exists to bound memory under
/// key churn.
pub const CIPHER_CACHE_CAPACITY: usize = 10;

/// Lower bound on shuffle rounds regardless of seed length.
pub const MIN_SHUFFLE_ROUNDS: usize = 10;

/// ARX state fill words, used when the seed provides fewer than 4 numbers.
/// These are the ChaCha20 "expand 32-byte k" constants; any fixed quadruple
/// would do, but both sides of a wire exchange must agree on one.
pub const SHUFFLE_IV: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Calendar date format fed into encryption-key derivation (YYYYMMDD).
pub const DATE_FORMAT: &str = "%Y%m%d";
