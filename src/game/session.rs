//! Game Session
//!
//! One round of play: the computer picks and commits, the human chooses,
//! the computer reveals. The session is consumed by `play`, so the key and
//! the computer's move are never reachable before the human's choice.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::core::rng::{os_rng, random_index, EntropyError};
use crate::game::moves::MoveSet;
use crate::game::outcome::{Outcome, Round, RulesError};
use crate::proof::commitment::{
    generate_key_with, CommitmentError, MoveCommitment, MoveReveal, SecretKey,
};

/// A session waiting for the human's move.
pub struct GameSession {
    moves: MoveSet,
    computer_move: usize,
    key: SecretKey,
    commitment: MoveCommitment,
}

impl GameSession {
    /// Start a session using the OS generator.
    pub fn start(moves: MoveSet, config: &GameConfig) -> Result<Self, SessionError> {
        Self::start_with_rng(moves, config, &mut os_rng())
    }

    /// Start a session with a caller-supplied secure generator.
    #[instrument(skip(moves, config, rng), fields(moves = moves.len(), key_bytes = config.key_bytes))]
    pub fn start_with_rng<R>(
        moves: MoveSet,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError>
    where
        R: RngCore + CryptoRng,
    {
        config.validate()?;

        let computer_move = random_index(rng, moves.len())?;
        let key = generate_key_with(rng, config.key_bytes)?;
        let commitment = moves
            .name(computer_move)
            .map(|name| MoveCommitment::new(&key, name))
            .ok_or(RulesError::InvalidMoveIndex {
                index: computer_move,
                total: moves.len(),
            })?;

        info!(code = %commitment, "Session started");

        Ok(Self {
            moves,
            computer_move,
            key,
            commitment,
        })
    }

    /// The published commitment.
    pub fn commitment(&self) -> &MoveCommitment {
        &self.commitment
    }

    /// Moves available this session.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of moves.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Lock in the human's move and reveal.
    #[instrument(skip(self), fields(code = %self.commitment))]
    pub fn play(self, human_move: usize) -> Result<RoundReveal, SessionError> {
        let total = self.moves.len();
        let round = Round::new(human_move, self.computer_move, total)?;

        let human_name = self.name_at(human_move)?;
        let computer_name = self.name_at(self.computer_move)?;

        debug!(computer = %computer_name, "Revealing computer move");
        info!(outcome = %round.outcome, "Round decided");

        Ok(RoundReveal {
            round,
            human_move: human_name,
            computer_move: computer_name,
            commitment: self.commitment,
            key: self.key,
        })
    }

    fn name_at(&self, index: usize) -> Result<String, RulesError> {
        self.moves
            .name(index)
            .map(str::to_string)
            .ok_or(RulesError::InvalidMoveIndex {
                index,
                total: self.moves.len(),
            })
    }
}

/// Everything disclosed once the round is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReveal {
    /// Indices and outcome.
    pub round: Round,
    /// Name of the human's move.
    pub human_move: String,
    /// Name of the computer's move.
    pub computer_move: String,
    /// Code published before the human chose.
    pub commitment: MoveCommitment,
    /// Key disclosed after the human chose.
    pub key: SecretKey,
}

impl RoundReveal {
    /// Outcome for the human.
    pub fn outcome(&self) -> Outcome {
        self.round.outcome
    }

    /// Key and move for independent verification.
    pub fn opening(&self) -> MoveReveal {
        MoveReveal::new(self.key.clone(), self.computer_move.clone())
    }

    /// Recompute the code from the disclosed key and computer move.
    pub fn verify(&self) -> Result<(), CommitmentError> {
        self.opening().verify(&self.commitment)
    }
}

/// Session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Secure randomness failed or key settings are too weak.
    #[error("entropy error: {0}")]
    Entropy(#[from] EntropyError),

    /// Rule contract violated.
    #[error("rules error: {0}")]
    Rules(#[from] RulesError),
}
