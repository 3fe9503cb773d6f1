//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the engine and the opponent policy share one definition of a line.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_win, check_winner, WIN_PATTERNS};

use super::{Board, Outcome, Player};
use tracing::instrument;

/// Classifies the board right after `mover` placed a mark.
///
/// The mover's own win is checked first; fullness only matters when that
/// check fails.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> Outcome {
    if check_win(mover, board) {
        Outcome::Win(mover)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
