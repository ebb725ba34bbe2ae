//! Move Commitment Protocol
//!
//! Commit to the computer's move before the human chooses.
//! Reveal the key afterwards so the human can recompute the code.
//!
//! ```text
//! start:   key  <- CSPRNG (>= 256 bits)
//!          code  = HMAC-SHA256(key, move_name)      -> published
//! choose:  human locks in a move
//! reveal:  key, move_name                           -> published
//! check:   HMAC-SHA256(key, move_name) == code
//! ```

use std::fmt;

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::hash::{digest_from_hex, digests_equal, hmac_sha256, to_hex, Digest};
use crate::core::rng::{os_rng, random_bytes, EntropyError, DEFAULT_KEY_BYTES, MIN_KEY_BYTES};

/// Secret HMAC key, kept hidden until the reveal.
///
/// `Debug` is redacted so the key cannot leak through logging.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    /// Wrap raw key bytes.
    ///
    /// Keys shorter than 256 bits are rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EntropyError> {
        if bytes.len() < MIN_KEY_BYTES {
            return Err(EntropyError::KeyTooShort {
                min: MIN_KEY_BYTES,
                got: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// Parse a disclosed hex key.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        let bytes = hex::decode(s.trim()).map_err(CommitmentError::InvalidHex)?;
        Self::from_bytes(bytes).map_err(|_| CommitmentError::KeyTooShort)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex encoding for disclosure.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes redacted>)", self.0.len())
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Generate a 256-bit key from the OS generator.
pub fn generate_key() -> Result<SecretKey, EntropyError> {
    generate_key_with(&mut os_rng(), DEFAULT_KEY_BYTES)
}

/// Generate a key of `len` bytes from a caller-supplied secure generator.
pub fn generate_key_with<R>(rng: &mut R, len: usize) -> Result<SecretKey, EntropyError>
where
    R: RngCore + CryptoRng,
{
    if len < MIN_KEY_BYTES {
        return Err(EntropyError::KeyTooShort {
            min: MIN_KEY_BYTES,
            got: len,
        });
    }
    SecretKey::from_bytes(random_bytes(rng, len)?)
}

/// Compute the commitment code for a move name.
///
/// # Example
///
/// ```
/// use fair_rps::proof::{commit, generate_key, verify};
///
/// let key = generate_key().unwrap();
/// let code = commit(&key, "rock");
/// assert!(verify(&key, "rock", &code));
/// assert!(!verify(&key, "paper", &code));
/// ```
pub fn commit(key: &SecretKey, move_name: &str) -> Digest {
    hmac_sha256(key.as_bytes(), move_name.as_bytes())
}

/// Recompute the code and compare it to `code`.
pub fn verify(key: &SecretKey, move_name: &str, code: &Digest) -> bool {
    digests_equal(&commit(key, move_name), code)
}

/// Verify hex-encoded disclosed values.
///
/// Malformed input is an error, a well-formed mismatch is `Ok(false)`.
pub fn verify_hex(key_hex: &str, move_name: &str, code_hex: &str) -> Result<bool, CommitmentError> {
    let key = SecretKey::from_hex(key_hex)?;
    let code = digest_from_hex(code_hex).map_err(CommitmentError::InvalidHex)?;
    Ok(verify(&key, move_name, &code))
}

/// Published commitment to a hidden move.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MoveCommitment {
    code: Digest,
}

impl MoveCommitment {
    /// Commit to `move_name` under `key`.
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        Self {
            code: commit(key, move_name),
        }
    }

    /// Rebuild a commitment from a published code.
    pub fn from_code(code: Digest) -> Self {
        Self { code }
    }

    /// Parse a published hex code.
    pub fn from_hex(s: &str) -> Result<Self, CommitmentError> {
        digest_from_hex(s)
            .map(Self::from_code)
            .map_err(CommitmentError::InvalidHex)
    }

    /// Hex encoding for display.
    pub fn to_hex(&self) -> String {
        to_hex(&self.code)
    }

    /// Check a key and move name against this commitment.
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        verify(key, move_name, &self.code)
    }
}

impl fmt::Debug for MoveCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveCommitment({})", self.to_hex())
    }
}

impl fmt::Display for MoveCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for MoveCommitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for MoveCommitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Reveal structure (published after the human's move is locked in).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReveal {
    /// The disclosed key.
    pub key: SecretKey,

    /// The move the computer committed to.
    pub move_name: String,
}

impl MoveReveal {
    /// Create a new reveal.
    pub fn new(key: SecretKey, move_name: impl Into<String>) -> Self {
        Self {
            key,
            move_name: move_name.into(),
        }
    }

    /// Verify reveal against commitment.
    pub fn verify(&self, commitment: &MoveCommitment) -> Result<(), CommitmentError> {
        if commitment.verify(&self.key, &self.move_name) {
            Ok(())
        } else {
            Err(CommitmentError::CodeMismatch)
        }
    }
}

/// Errors that can occur during commitment verification.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// Key or code is not valid hex of the right length.
    #[error("invalid hex: {0}")]
    InvalidHex(#[source] hex::FromHexError),

    /// Disclosed key is shorter than 256 bits.
    #[error("disclosed key is shorter than {} bytes", MIN_KEY_BYTES)]
    KeyTooShort,

    /// Recomputed code doesn't match the published one.
    #[error("revealed move does not match commitment")]
    CodeMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::test_support::FailingRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_key() -> SecretKey {
        SecretKey::from_bytes(vec![0x42; 32]).unwrap()
    }

    #[test]
    fn test_generate_key_length() {
        let key = generate_key().unwrap();
        assert_eq!(key.as_bytes().len(), 32);
        assert_eq!(key.to_hex().len(), 64);
    }

    #[test]
    fn test_generate_key_rejects_short_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_key_with(&mut rng, 16),
            Err(EntropyError::KeyTooShort { min: 32, got: 16 })
        ));
        assert_eq!(generate_key_with(&mut rng, 64).unwrap().as_bytes().len(), 64);
    }

    #[test]
    fn test_generate_key_entropy_failure() {
        assert!(matches!(
            generate_key_with(&mut FailingRng, 32),
            Err(EntropyError::EntropySourceUnavailable(_))
        ));
    }

    #[test]
    fn test_commit_determinism() {
        let key = test_key();
        assert_eq!(commit(&key, "rock"), commit(&key, "rock"));
        assert_eq!(MoveCommitment::new(&key, "rock"), MoveCommitment::new(&key, "rock"));
    }

    #[test]
    fn test_commit_bit_flips_change_code() {
        let key = test_key();
        let base = commit(&key, "scissors");

        for byte in 0..32 {
            for bit in 0..8 {
                let mut bytes = key.as_bytes().to_vec();
                bytes[byte] ^= 1 << bit;
                let flipped = SecretKey::from_bytes(bytes).unwrap();
                assert_ne!(commit(&flipped, "scissors"), base);
            }
        }

        let name = b"scissors";
        for byte in 0..name.len() {
            for bit in 0..7 {
                let mut mutated = name.to_vec();
                mutated[byte] ^= 1 << bit;
                let mutated = String::from_utf8(mutated).unwrap();
                assert_ne!(commit(&key, &mutated), base);
            }
        }
    }

    #[test]
    fn test_reveal_verification() {
        let key = test_key();
        let commitment = MoveCommitment::new(&key, "paper");

        let reveal = MoveReveal::new(key.clone(), "paper");
        assert!(reveal.verify(&commitment).is_ok());

        let lie = MoveReveal::new(key, "rock");
        assert!(matches!(lie.verify(&commitment), Err(CommitmentError::CodeMismatch)));
    }

    #[test]
    fn test_reveal_wrong_key_fails() {
        let commitment = MoveCommitment::new(&test_key(), "paper");
        let other = SecretKey::from_bytes(vec![0x43; 32]).unwrap();
        assert!(!commitment.verify(&other, "paper"));
    }

    #[test]
    fn test_verify_hex_roundtrip() {
        let key = test_key();
        let code = MoveCommitment::new(&key, "lizard").to_hex();

        assert!(verify_hex(&key.to_hex(), "lizard", &code).unwrap());
        assert!(!verify_hex(&key.to_hex(), "spock", &code).unwrap());
    }

    #[test]
    fn test_verify_hex_malformed() {
        let key = test_key();
        let code = MoveCommitment::new(&key, "rock").to_hex();

        assert!(matches!(
            verify_hex("not hex", "rock", &code),
            Err(CommitmentError::InvalidHex(_))
        ));
        assert!(matches!(
            verify_hex(&key.to_hex(), "rock", &code[..10]),
            Err(CommitmentError::InvalidHex(_))
        ));
        assert!(matches!(
            verify_hex("abcd", "rock", &code),
            Err(CommitmentError::KeyTooShort)
        ));
    }

    #[test]
    fn test_secret_key_debug_redacted() {
        let key = test_key();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(&key.to_hex()));
        assert!(!debug.contains("42"));
    }

    #[test]
    fn test_reveal_serde_uses_hex() {
        let reveal = MoveReveal::new(test_key(), "rock");
        let json = serde_json::to_value(&reveal).unwrap();
        assert_eq!(json["key"], test_key().to_hex());
        assert_eq!(json["move_name"], "rock");

        let back: MoveReveal = serde_json::from_value(json).unwrap();
        assert_eq!(back, reveal);
    }
}
