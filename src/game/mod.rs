//! Game Logic Module
//!
//! Move validation, the cyclic win rule, and a single committed round.
//!
//! ## Module Structure
//!
//! - `moves`: Validated move set
//! - `outcome`: Cyclic win rule and rounds
//! - `matrix`: Payoff table for help display
//! - `session`: Commit, play, reveal

pub mod moves;
pub mod outcome;
pub mod matrix;
pub mod session;

// Re-export key types
pub use moves::{MoveSet, MoveSetError, MIN_MOVES};
pub use outcome::{determine_outcome, is_winning_move, Outcome, Round, RulesError};
pub use matrix::{build_payoff_matrix, PayoffMatrix};
pub use session::{GameSession, RoundReveal, SessionError};
