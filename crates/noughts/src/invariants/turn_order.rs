//! Turn order invariant: the phase agrees with the marks on the board.

use super::super::GameState;
use super::Invariant;

/// Invariant: while a game is running, the player to move is the opener when
/// counts are level and the other player otherwise.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(to_move) = state.whose_turn() else {
            return true;
        };
        let starter = state.starting_player();
        let level = state.board().count(starter) == state.board().count(starter.opponent());
        let expected = if level { starter } else { starter.opponent() };
        to_move == expected
    }

    fn description() -> &'static str {
        "Player to move matches the opener and the mark counts"
    }
}
