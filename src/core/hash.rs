//! Keyed Hashing for Commitments
//!
//! Provides the HMAC-SHA256 primitive behind move commitments and
//! the hex helpers used to disclose codes and keys.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Digest output type (256 bits / 32 bytes)
pub type Digest = [u8; 32];

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 of `message` under `key`.
///
/// HMAC accepts keys of any length, so this never fails.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> Digest {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Compare two digests without short-circuiting on the first differing byte.
#[inline]
pub fn digests_equal(a: &Digest, b: &Digest) -> bool {
    bool::from(a.ct_eq(b))
}

/// Encode bytes as lowercase hex.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a 32-byte digest from hex.
///
/// Surrounding whitespace is ignored; case is not significant.
pub fn digest_from_hex(s: &str) -> Result<Digest, hex::FromHexError> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s.trim(), &mut out)?;
    Ok(out)
}
