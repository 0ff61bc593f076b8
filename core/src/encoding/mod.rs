//! encoding/mod.rs
//! Text layer: the permuted-alphabet base64 codec and the shuffle engine
//! that derives the permutation from a key digest.

pub mod codec;
pub mod shuffle;

pub use codec::Alphabet;
pub use shuffle::permuted_alphabet;
