//! Noughts - tic-tac-toe against a scripted opponent
//!
//! The game core: board, rules, turn machine and the opponent's move policy.
//! Rendering, input and pacing belong to the caller, which drives the engine
//! through four operations and renders the [`GameState`] snapshots it gets
//! back.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Phase, SequenceRandom};
//!
//! let mut engine = GameEngine::new(SequenceRandom::new([0]));
//! let state = engine.submit_human_move(0)?;
//! assert_eq!(state.phase(), Phase::AwaitingOpponent);
//!
//! // The caller decides when the opponent moves.
//! let state = engine.run_opponent_turn()?;
//! assert_eq!(state.phase(), Phase::AwaitingHuman);
//! # Ok::<(), noughts::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
pub mod invariants;
mod opponent;
mod phases;
mod position;
mod rng;
pub mod rules;
mod types;

pub use action::Move;
pub use board::Board;
pub use engine::GameEngine;
pub use error::GameError;
pub use opponent::{Decision, OpponentPolicy, Tier};
pub use phases::{GameState, Outcome, Phase};
pub use position::Position;
pub use rng::{RandomSource, SequenceRandom, StdRandom};
pub use types::{Player, Square};
