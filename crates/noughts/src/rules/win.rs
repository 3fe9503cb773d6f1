//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// True iff `player` owns all three cells of at least one pattern.
#[instrument(skip(board))]
pub fn check_win(player: Player, board: &Board) -> bool {
    let owned = board.occupied_cells(player);
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|pos| owned.contains(pos)))
}

/// Returns whichever player owns a complete pattern.
///
/// On a legal board at most one player can. On a hand-built board where
/// both do, the human is reported.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| check_win(player, board))
}
