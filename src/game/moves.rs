//! Move Set
//!
//! The ordered list of move names a game is played with. Position in the
//! list is the move's index for the cyclic rule.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

/// Fewest moves a game can have.
pub const MIN_MOVES: usize = 3;

/// Validated, immutable set of move names.
///
/// Always holds an odd number (at least 3) of pairwise distinct names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Names are compared case-sensitively.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { got: names.len() });
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { got: names.len() });
        }

        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; a valid set has at least three moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Move name at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterate names in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Reasons a move list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than three moves.
    #[error("at least {} moves are required, got {got}", MIN_MOVES)]
    TooFewMoves {
        /// Number supplied.
        got: usize,
    },

    /// Even number of moves.
    #[error("the number of moves must be odd, got {got}")]
    EvenMoveCount {
        /// Number supplied.
        got: usize,
    },

    /// The same name appears twice.
    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}
