//! mb64-core
//!
//! Keyed, deterministic, text-safe encoding: authenticated encryption
//! (AES-256-GCM, daily-rotated key) composed with a base64-style codec
//! whose 64-symbol alphabet is itself a key-derived permutation.
//!
//! Independent implementations given the same passphrase and calendar date
//! produce and consume byte-identical output; bit-exactness of the shuffle
//! is the hard contract and is pinned by fixed vectors in the test suite.

#![forbid(unsafe_code)]

// Shared and top level
pub mod cache;
pub mod clock;
pub mod constants;
pub mod types;

// Domain layers
pub mod crypto;
pub mod encoding;

// Facade
pub mod coder;

pub use clock::{Clock, FixedClock, SystemClock};
pub use coder::Coder;
pub use types::{Mb64Error, Mode};
