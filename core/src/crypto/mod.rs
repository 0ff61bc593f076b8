//! crypto/mod.rs
//! Key derivation and the authenticated encryption engine.

pub mod cipher;
pub mod kdf;

pub use cipher::CipherEngine;
pub use kdf::KeyDerivation;
