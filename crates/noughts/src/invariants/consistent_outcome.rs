//! Consistent outcome invariant: the phase never contradicts the board.

use super::super::rules::{check_win, is_draw, is_full};
use super::super::{GameState, Outcome, Phase, Player};
use super::Invariant;

/// Invariant: a terminal phase is backed by a completed line or a drawn
/// board, and a running game has neither.
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameState> for ConsistentOutcomeInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.phase() {
            Phase::Terminal(Outcome::Win(player)) => check_win(player, board),
            Phase::Terminal(Outcome::Draw) => is_draw(board),
            Phase::Terminal(Outcome::InProgress) => false,
            Phase::AwaitingHuman | Phase::AwaitingOpponent => {
                !is_full(board)
                    && !check_win(Player::Human, board)
                    && !check_win(Player::Opponent, board)
            }
        }
    }

    fn description() -> &'static str {
        "Phase agrees with the lines and free cells on the board"
    }
}
