//! types.rs
//! Error taxonomy and configuration mode shared across the crate.
//!
//! Propagation policy: every failure surfaces to the immediate caller as a
//! distinct, inspectable value. Nothing is retried or silently recovered;
//! a cryptographic failure aborts the operation. The one deliberate
//! exception lives in the codec layer, where out-of-alphabet symbols decode
//! to zero and integrity is enforced downstream by authentication.

use thiserror::Error;

/// Failure kinds surfaced by the public operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Mb64Error {
    /// `set_encoding` was called with an empty key. Prior state is untouched.
    #[error("key cannot be empty")]
    EmptyKey,

    /// `encode`/`decode` invoked before `set_encoding` or `bypass`.
    #[error("encoding not configured: call set_encoding or bypass first")]
    EncodingState,

    /// Ciphertext shorter than the fixed nonce(12) + tag(16) envelope.
    #[error("ciphertext too short: {actual} bytes, need at least 28")]
    InputTooShort { actual: usize },

    /// AEAD tag verification failed: wrong key, corrupted bytes, or a
    /// date-boundary key mismatch. Indistinguishable by design.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailure,

    /// Backend failure with context. Not reachable through the documented
    /// operations on in-memory payloads.
    #[error("crypto failure: {0}")]
    Failure(String),
}

/// Configuration state of a coder. There is no implicit initial mode;
/// a freshly constructed coder refuses to encode or decode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Identity cipher + canonical base64 alphabet (plain-base64 interop).
    Bypassed,
    /// AES-256-GCM + key-derived permuted alphabet.
    Keyed,
}
