//! Cyclic Win Rule
//!
//! Moves sit on a cycle in index order. Each move beats the previous
//! `floor(N/2)` moves (cyclically) and loses to the next `floor(N/2)`, so
//! rock (0) beats scissors (2) and loses to paper (1). With N odd the
//! two ranges partition every other move, so every pair of distinct moves has
//! exactly one winner.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::moves::MIN_MOVES;

/// Result of a round from the mover's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Mover wins.
    Win,
    /// Mover loses.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// Table label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract violations from callers of the rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// Move count is even or below three.
    #[error("invalid move count {total}: must be odd and at least {}", MIN_MOVES)]
    InvalidMoveCount {
        /// Count supplied.
        total: usize,
    },

    /// Move index outside `[0, total)`.
    #[error("move index {index} is out of range for {total} moves")]
    InvalidMoveIndex {
        /// Index supplied.
        index: usize,
        /// Move count.
        total: usize,
    },
}

fn check_move_count(total: usize) -> Result<(), RulesError> {
    if total < MIN_MOVES || total % 2 == 0 {
        return Err(RulesError::InvalidMoveCount { total });
    }
    Ok(())
}

fn check_index(index: usize, total: usize) -> Result<(), RulesError> {
    if index >= total {
        return Err(RulesError::InvalidMoveIndex { index, total });
    }
    Ok(())
}

/// Does move `a` beat move `b`?
///
/// `distance = (a - b) mod total`; `a` wins iff `1 <= distance <= total / 2`.
/// Equal indices give `false`; callers check for a draw first.
pub fn is_winning_move(a: usize, b: usize, total: usize) -> Result<bool, RulesError> {
    check_move_count(total)?;
    check_index(a, total)?;
    check_index(b, total)?;

    // Both indices are below `total`, so neither branch can overflow.
    let distance = if a >= b { a - b } else { a + (total - b) };
    Ok((1..=total / 2).contains(&distance))
}

/// Outcome for the human given both indices.
pub fn determine_outcome(human: usize, computer: usize, total: usize) -> Result<Outcome, RulesError> {
    check_move_count(total)?;
    check_index(human, total)?;
    check_index(computer, total)?;

    if human == computer {
        Ok(Outcome::Draw)
    } else if is_winning_move(human, computer, total)? {
        Ok(Outcome::Win)
    } else {
        Ok(Outcome::Lose)
    }
}

/// A played round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Human's move index.
    pub human_move: usize,
    /// Computer's move index.
    pub computer_move: usize,
    /// Outcome for the human.
    pub outcome: Outcome,
}

impl Round {
    /// Decide a round.
    pub fn new(human_move: usize, computer_move: usize, total: usize) -> Result<Self, RulesError> {
        let outcome = determine_outcome(human_move, computer_move, total)?;
        Ok(Self {
            human_move,
            computer_move,
            outcome,
        })
    }
}
