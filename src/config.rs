//! Game Configuration
//!
//! Defaults plus environment overrides. The binary layers CLI flags on top.

use tracing::warn;

use crate::core::rng::{EntropyError, DEFAULT_KEY_BYTES, MIN_KEY_BYTES};
use crate::game::matrix::DEFAULT_CORNER_LABEL;

/// Environment variable for the secret key length in bytes.
pub const ENV_KEY_BYTES: &str = "FAIR_RPS_KEY_BYTES";

/// Environment variable for the payoff table corner label.
pub const ENV_CORNER_LABEL: &str = "FAIR_RPS_CORNER_LABEL";

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Secret key length in bytes (at least 32).
    pub key_bytes: usize,
    /// Top-left cell of the payoff table.
    pub corner_label: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_bytes: DEFAULT_KEY_BYTES,
            corner_label: DEFAULT_CORNER_LABEL.to_string(),
        }
    }
}

impl GameConfig {
    /// Create config from environment variables.
    ///
    /// Unset values fall back to the defaults. Unparsable values fall back
    /// too, with a warning naming the variable.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            key_bytes: lookup(ENV_KEY_BYTES)
                .and_then(|v| parse_key_bytes(&v))
                .unwrap_or(defaults.key_bytes),
            corner_label: lookup(ENV_CORNER_LABEL).unwrap_or(defaults.corner_label),
        }
    }

    /// Reject settings that would weaken the commitment.
    pub fn validate(&self) -> Result<(), EntropyError> {
        if self.key_bytes < MIN_KEY_BYTES {
            return Err(EntropyError::KeyTooShort {
                min: MIN_KEY_BYTES,
                got: self.key_bytes,
            });
        }
        Ok(())
    }
}

fn parse_key_bytes(raw: &str) -> Option<usize> {
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(
                "Ignoring {}={:?} ({}); using {} bytes",
                ENV_KEY_BYTES, raw, e, DEFAULT_KEY_BYTES
            );
            None
        }
    }
}
