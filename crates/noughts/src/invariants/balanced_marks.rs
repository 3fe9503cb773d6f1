//! Balanced marks: players alternate, so counts never drift apart.

use super::super::GameState;
use super::Invariant;

/// Invariant: the opening player has the same number of marks as the other
/// player, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let starter = state.starting_player();
        let lead = state.board().count(starter);
        let trail = state.board().count(starter.opponent());
        lead == trail || lead == trail + 1
    }

    fn description() -> &'static str {
        "Opening player has equal or one more marks than the other player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Phase, Player, Position};

    #[test]
    fn test_trailing_starter_violates() {
        let mut board = Board::new();
        board
            .place(Move::new(Player::Opponent, Position::Center))
            .unwrap();
        let state = GameState::new(board, Phase::AwaitingHuman, Player::Human);
        assert!(!BalancedMarksInvariant::holds(&state));
    }

    #[test]
    fn test_one_ahead_holds() {
        let mut board = Board::new();
        board
            .place(Move::new(Player::Opponent, Position::Center))
            .unwrap();
        let state = GameState::new(board, Phase::AwaitingHuman, Player::Opponent);
        assert!(BalancedMarksInvariant::holds(&state));
    }
}
