//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::check_win;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which neither player owns a pattern.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(Player::Human, board) && !check_win(Player::Opponent, board)
}
