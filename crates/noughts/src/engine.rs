//! Turn-based game engine for human vs. scripted opponent.
//!
//! The engine owns the board for the whole lifetime of a game and is an
//! explicit state machine:
//!
//! ```text
//!   AwaitingHuman --submit_human_move--> AwaitingOpponent | Terminal
//!   AwaitingOpponent --run_opponent_turn--> AwaitingHuman | Terminal
//!   any --reset--> AwaitingHuman | AwaitingOpponent (opener alternates)
//! ```
//!
//! Every operation is synchronous. Pacing the opponent's reply is left to the
//! caller, which decides when to call [`GameEngine::run_opponent_turn`].

use super::error::GameError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::opponent::OpponentPolicy;
use super::phases::{GameState, Phase};
use super::rng::{RandomSource, StdRandom};
use super::{rules, Board, Move, Player, Position};
use tracing::{debug, error, info, instrument, warn};

/// Game engine for one human against the scripted opponent.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRandom> {
    board: Board,
    phase: Phase,
    starting_player: Player,
    policy: OpponentPolicy<R>,
}

impl GameEngine<StdRandom> {
    /// Creates an engine whose opponent draws from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRandom::from_entropy())
    }

    /// Creates an engine with a reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRandom::seeded(seed))
    }
}

impl Default for GameEngine<StdRandom> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Creates an engine. The first game is opened by the human.
    #[instrument(skip(rng))]
    pub fn new(rng: R) -> Self {
        info!(starting_player = %Player::Human, "New game");
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            starting_player: Player::Human,
            policy: OpponentPolicy::new(rng),
        }
    }

    /// Places the human's mark on `cell` (0-8).
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended
    /// - [`GameError::InvalidMove`] while waiting for the opponent
    /// - [`GameError::OutOfRange`] for an index above 8
    /// - [`GameError::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit_human_move(&mut self, cell: usize) -> Result<GameState, GameError> {
        self.expect_turn(Player::Human)?;
        let pos = Position::try_from(cell).inspect_err(|e| {
            error!(error = %e, "Human move outside the board");
        })?;
        self.apply(Player::Human, pos)
    }

    /// Lets the opponent pick and place its mark.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended
    /// - [`GameError::InvalidMove`] while waiting for the human
    /// - [`GameError::NoLegalMove`] if the board is somehow full
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn run_opponent_turn(&mut self) -> Result<GameState, GameError> {
        self.expect_turn(Player::Opponent)?;
        let decision = self.policy.decide(&self.board).inspect_err(|e| {
            error!(error = %e, "Opponent asked to move with no legal move");
        })?;
        self.apply(Player::Opponent, decision.cell())
    }

    /// Starts a fresh game. The opener alternates with every reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        self.board.reset();
        self.starting_player = self.starting_player.opponent();
        self.phase = Phase::awaiting(self.starting_player);
        info!(starting_player = %self.starting_player, "New game");
        self.current_state()
    }

    /// Read-only snapshot of the current game.
    pub fn current_state(&self) -> GameState {
        GameState::new(self.board.clone(), self.phase, self.starting_player)
    }

    /// Rejects a move from `player` unless the machine is waiting for it.
    fn expect_turn(&self, player: Player) -> Result<(), GameError> {
        match self.phase {
            Phase::Terminal(outcome) => {
                warn!(%player, %outcome, "Move after game over");
                Err(GameError::GameOver)
            }
            phase if phase.to_move() != Some(player) => {
                warn!(%player, ?phase, "Move out of turn");
                Err(GameError::InvalidMove)
            }
            _ => Ok(()),
        }
    }

    fn apply(&mut self, player: Player, pos: Position) -> Result<GameState, GameError> {
        let mv = Move::new(player, pos);
        self.board.place(mv).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        let outcome = rules::evaluate(&self.board, player);
        self.phase = if outcome.is_terminal() {
            info!(%outcome, "Game over");
            Phase::Terminal(outcome)
        } else {
            Phase::awaiting(player.opponent())
        };
        debug!(%mv, phase = ?self.phase, "Move applied");

        let state = self.current_state();
        if cfg!(debug_assertions) {
            assert_invariants(&state);
        }
        Ok(state)
    }
}

/// Logs and asserts (debug builds) on any broken engine invariant.
fn assert_invariants(state: &GameState) {
    if let Err(violations) = EngineInvariants::check_all(state) {
        for violation in &violations {
            error!(%violation, "Engine invariant violated");
        }
        debug_assert!(false, "Engine invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRandom;
    use crate::Outcome;

    fn engine() -> GameEngine<SequenceRandom> {
        GameEngine::new(SequenceRandom::new([0]))
    }

    #[test]
    fn test_new_engine_awaits_human() {
        let state = engine().current_state();
        assert_eq!(state.phase(), Phase::AwaitingHuman);
        assert_eq!(state.starting_player(), Player::Human);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_human_move_hands_turn_to_opponent() {
        let mut engine = engine();
        let state = engine.submit_human_move(0).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingOpponent);
        assert_eq!(
            state.board().get(Position::TopLeft),
            crate::Square::Occupied(Player::Human)
        );
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut engine = engine();
        engine.submit_human_move(0).unwrap();
        assert_eq!(engine.submit_human_move(1), Err(GameError::InvalidMove));
    }

    #[test]
    fn test_opponent_cannot_move_out_of_turn() {
        let mut engine = engine();
        assert_eq!(engine.run_opponent_turn(), Err(GameError::InvalidMove));
    }

    #[test]
    fn test_out_of_range_leaves_state_alone() {
        let mut engine = engine();
        let before = engine.current_state();
        assert_eq!(engine.submit_human_move(9), Err(GameError::OutOfRange(9)));
        assert_eq!(engine.current_state(), before);
    }

    #[test]
    fn test_occupied_cell_rejected_and_turn_kept() {
        let mut engine = engine();
        engine.submit_human_move(0).unwrap();
        engine.run_opponent_turn().unwrap(); // takes the center
        assert_eq!(
            engine.submit_human_move(4),
            Err(GameError::CellOccupied(Position::Center))
        );
        assert_eq!(engine.current_state().phase(), Phase::AwaitingHuman);
    }

    #[test]
    fn test_reset_toggles_opener() {
        let mut engine = engine();
        assert_eq!(engine.reset().phase(), Phase::AwaitingOpponent);
        assert_eq!(engine.reset().phase(), Phase::AwaitingHuman);
    }
}
