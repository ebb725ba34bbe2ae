//! Fair Play Proof
//!
//! The computer publishes an HMAC of its move before the human chooses and
//! discloses the key afterwards. Anyone holding the disclosed values can
//! recompute the code, so the computer cannot switch moves after the fact.

pub mod commitment;

// Re-export key types
pub use commitment::{
    commit, generate_key, generate_key_with, verify, verify_hex,
    CommitmentError, MoveCommitment, MoveReveal, SecretKey,
};
