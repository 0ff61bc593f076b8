//! coder.rs
//! Mode controller and public facade.
//!
//! A `Coder` owns every piece of configuration state the reference design
//! kept as process globals: mode, base key, bound alphabet, and both
//! caches. Making it an explicit per-instance object removes the shared
//! mutable state hazard; callers that need a process-wide instance (the
//! FFI layer does) wrap one in a mutex themselves.
//!
//! Two-state machine: `Bypassed` or `Keyed`, last call wins, no implicit
//! initial state. `encode`/`decode` before any configuring call is a
//! caller precondition violation surfaced as `EncodingState`.

use crate::clock::{Clock, SystemClock};
use crate::crypto::{CipherEngine, KeyDerivation};
use crate::encoding::{permuted_alphabet, Alphabet};
use crate::types::{Mb64Error, Mode};

/// Keyed text coder: authenticated encryption composed with a
/// permuted-alphabet base64 codec.
pub struct Coder {
    mode: Option<Mode>,
    base_key: String,
    alphabet: Alphabet,
    derivation: KeyDerivation,
    cipher: CipherEngine,
    clock: Box<dyn Clock>,
}

impl Coder {
    /// Coder on the system clock. Unusable until `set_encoding` or
    /// `bypass` is called.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Coder with an injected date source; used by tests to pin the
    /// calendar date and exercise rollover behavior.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            mode: None,
            base_key: String::new(),
            alphabet: Alphabet::canonical(),
            derivation: KeyDerivation::new(),
            cipher: CipherEngine::new(),
            clock,
        }
    }

    /// Current mode, `None` before any configuring call.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// The alphabet currently bound to the codec.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Store `key` as the base key, derive the alphabet permutation from
    /// it, and enter keyed mode. An empty key fails with `EmptyKey` and
    /// leaves all prior state untouched.
    pub fn set_encoding(&mut self, key: &str) -> Result<(), Mb64Error> {
        if key.is_empty() {
            return Err(Mb64Error::EmptyKey);
        }

        self.base_key = key.to_string();
        let alphabet_key = self.derivation.alphabet_key(key);
        self.alphabet = Alphabet::from_chars(permuted_alphabet(&alphabet_key));
        self.mode = Some(Mode::Keyed);
        Ok(())
    }

    /// Enter bypassed mode: identity cipher plus the canonical base64
    /// alphabet. Always succeeds. The stored base key is kept, so a later
    /// `set_encoding` restores keyed operation.
    pub fn bypass(&mut self) {
        self.alphabet = Alphabet::canonical();
        self.mode = Some(Mode::Bypassed);
    }

    /// Encrypt-then-encode under the current pairing. In bypassed mode
    /// this is plain canonical base64 of `data`.
    pub fn encode(&mut self, data: &[u8]) -> Result<String, Mb64Error> {
        let mode = self.mode.ok_or(Mb64Error::EncodingState)?;

        let wire = match mode {
            Mode::Bypassed => data.to_vec(),
            Mode::Keyed => {
                let date = self.clock.today();
                let key = self.derivation.encryption_key(&self.base_key, &date);
                self.cipher.encrypt(&key, data)?
            }
        };

        Ok(self.alphabet.encode(&wire))
    }

    /// Decode-then-decrypt under the current pairing. Leading and trailing
    /// whitespace is trimmed before decoding.
    pub fn decode(&mut self, text: &str) -> Result<Vec<u8>, Mb64Error> {
        let mode = self.mode.ok_or(Mb64Error::EncodingState)?;
        let wire = self.alphabet.decode(text.trim());

        match mode {
            Mode::Bypassed => Ok(wire),
            Mode::Keyed => {
                let date = self.clock.today();
                let key = self.derivation.encryption_key(&self.base_key, &date);
                self.cipher.decrypt(&key, &wire)
            }
        }
    }
}

impl Default for Coder {
    fn default() -> Self {
        Self::new()
    }
}
