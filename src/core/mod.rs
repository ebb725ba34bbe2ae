//! Core cryptographic primitives.
//!
//! Keyed hashing and secure randomness. Everything that a commitment's
//! trustworthiness rests on lives here.

pub mod hash;
pub mod rng;

// Re-export core types
pub use hash::{Digest, hmac_sha256, to_hex};
pub use rng::{EntropyError, MIN_KEY_BYTES, DEFAULT_KEY_BYTES};
