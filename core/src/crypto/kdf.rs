//! crypto/kdf.rs
//! Key derivation: SHA-256 over passphrase material, memoized.
//!
//! Two derived keys come out of the same hash primitive:
//! - alphabet key = hash(base_key), stable for the lifetime of a base key;
//! - encryption key = hash(base_key || date), rotating once per calendar
//!   day. A decode attempted just after a date rollover on a payload made
//!   just before it fails authentication; that rotation is documented
//!   behavior, not something to special-case.

use crate::cache::LruCache;
use crate::constants::{HASH_CACHE_CAPACITY, KEY_LEN_32};
use sha2::{Digest, Sha256};

/// Digest service with a bounded memo cache keyed by the input string.
pub struct KeyDerivation {
    hash_cache: LruCache<[u8; KEY_LEN_32]>,
}

impl KeyDerivation {
    pub fn new() -> Self {
        Self {
            hash_cache: LruCache::new(HASH_CACHE_CAPACITY),
        }
    }

    /// SHA-256 of `input`, served from the cache when warm.
    pub fn hash(&mut self, input: &str) -> [u8; KEY_LEN_32] {
        if let Some(digest) = self.hash_cache.get(input) {
            return *digest;
        }

        let digest: [u8; KEY_LEN_32] = Sha256::digest(input.as_bytes()).into();
        self.hash_cache.put(input.to_string(), digest);
        digest
    }

    /// Key driving the alphabet permutation. Time-independent.
    pub fn alphabet_key(&mut self, base_key: &str) -> [u8; KEY_LEN_32] {
        self.hash(base_key)
    }

    /// Key driving encryption. `date` is the local calendar date formatted
    /// `YYYYMMDD`, so the result rotates daily.
    pub fn encryption_key(&mut self, base_key: &str, date: &str) -> [u8; KEY_LEN_32] {
        self.hash(&format!("{base_key}{date}"))
    }
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self::new()
    }
}
