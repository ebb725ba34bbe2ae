//! # Fair RPS
//!
//! Generalized rock-paper-scissors over any odd number of moves, where the
//! computer commits to its move with an HMAC before the human chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIR RPS                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Cryptographic primitives                  │
//! │  ├── hash.rs     - HMAC-SHA256, hex, constant-time compare   │
//! │  └── rng.rs      - CSPRNG keys and unbiased index draws      │
//! │                                                              │
//! │  proof/          - Commit-reveal protocol                    │
//! │  └── commitment.rs - Keys, codes, reveals, verification      │
//! │                                                              │
//! │  game/           - Game logic                                │
//! │  ├── moves.rs    - Move set validation                       │
//! │  ├── outcome.rs  - Cyclic win rule                           │
//! │  ├── matrix.rs   - Payoff table                              │
//! │  └── session.rs  - Commit, play, reveal                      │
//! │                                                              │
//! │  config.rs       - Defaults and environment overrides        │
//! │  menu.rs         - Prompt parsing and rendering              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! The code `HMAC-SHA256(key, computer_move)` is printed before the human
//! chooses. The key comes from the OS CSPRNG and is only disclosed after the
//! human's move is locked in, so the human can recompute the code and
//! confirm the computer played what it committed to.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod game;
pub mod menu;
pub mod proof;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::{GameSession, MoveSet, Outcome, PayoffMatrix, Round, RoundReveal};
pub use proof::{MoveCommitment, SecretKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
