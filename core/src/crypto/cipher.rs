//! crypto/cipher.rs
//! Authenticated encryption engine: AES-256-GCM over the daily derived key.
//!
//! Wire layout: `nonce(12) || ciphertext(N) || tag(16)`, total `28 + N`
//! where N equals the plaintext length (GCM is a stream construction).
//! Both fields sit at fixed offsets; any compliant implementation must
//! split them identically.
//!
//! Constructed cipher instances are cached in a small LRU keyed by the hex
//! form of the derived key. About one key is live per day, so the cache
//! exists to bound memory under key churn rather than to win throughput.
//!
//! Nonces come from the OS RNG and are never reused; entropy exhaustion is
//! an external fault that aborts the process rather than being retried.

use crate::cache::LruCache;
use crate::constants::{CIPHER_CACHE_CAPACITY, KEY_LEN_32, NONCE_LEN_12, WIRE_OVERHEAD};
use crate::types::Mb64Error;
use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Key, KeyInit, Nonce};

/// AEAD engine with a bounded cache of recently used keys.
pub struct CipherEngine {
    cipher_cache: LruCache<Aes256Gcm>,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self {
            cipher_cache: LruCache::new(CIPHER_CACHE_CAPACITY),
        }
    }

    fn cipher_for(&mut self, key: &[u8; KEY_LEN_32]) -> Aes256Gcm {
        let cache_key = hex::encode(key);
        if let Some(cipher) = self.cipher_cache.get(&cache_key) {
            return cipher.clone();
        }

        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        self.cipher_cache.put(cache_key, cipher.clone());
        cipher
    }

    /// Seal `plaintext` under `key` with a fresh random nonce.
    /// Returns `nonce || ciphertext || tag`.
    pub fn encrypt(
        &mut self,
        key: &[u8; KEY_LEN_32],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, Mb64Error> {
        let cipher = self.cipher_for(key);
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let sealed = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| Mb64Error::Failure("AES-GCM seal failed".into()))?;

        let mut wire = Vec::with_capacity(NONCE_LEN_12 + sealed.len());
        wire.extend_from_slice(&nonce);
        wire.extend_from_slice(&sealed);
        Ok(wire)
    }

    /// Open `wire` under `key`. Fails with `InputTooShort` below the fixed
    /// 28-byte envelope and `AuthenticationFailure` on tag mismatch.
    pub fn decrypt(
        &mut self,
        key: &[u8; KEY_LEN_32],
        wire: &[u8],
    ) -> Result<Vec<u8>, Mb64Error> {
        if wire.len() < WIRE_OVERHEAD {
            return Err(Mb64Error::InputTooShort { actual: wire.len() });
        }

        let cipher = self.cipher_for(key);
        let (nonce, sealed) = wire.split_at(NONCE_LEN_12);

        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| Mb64Error::AuthenticationFailure)
    }
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new()
    }
}
