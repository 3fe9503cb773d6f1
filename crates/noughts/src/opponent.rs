//! Scripted opponent: a fixed-priority heuristic, not a search.
//!
//! Tiers, in order:
//! 1. win now by completing one of its own lines
//! 2. block a line the human is about to complete
//! 3. take the center
//! 4. take a uniformly random empty cell
//!
//! The heuristic can be forked. That weakness is part of the game.

use super::error::GameError;
use super::rng::RandomSource;
use super::rules::WIN_PATTERNS;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which tier produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Tier {
    /// Completed one of the opponent's own lines.
    WinNow,
    /// Filled the gap in one of the human's lines.
    Block,
    /// Took cell 4.
    Center,
    /// Fell through to a random empty cell.
    Random,
}

/// A chosen cell together with the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    cell: Position,
    tier: Tier,
}

impl Decision {
    /// The chosen cell.
    pub fn cell(&self) -> Position {
        self.cell
    }

    /// The tier that fired.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/// Move selection for [`Player::Opponent`].
#[derive(Debug, Clone)]
pub struct OpponentPolicy<R> {
    rng: R,
}

impl<R: RandomSource> OpponentPolicy<R> {
    /// Creates a policy drawing its fallback moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks the opponent's next cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    pub fn select_move(&mut self, board: &Board) -> Result<Position, GameError> {
        self.decide(board).map(|decision| decision.cell)
    }

    /// Like [`select_move`](Self::select_move), but also reports the tier.
    #[instrument(skip(self, board))]
    pub fn decide(&mut self, board: &Board) -> Result<Decision, GameError> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return Err(GameError::NoLegalMove);
        }

        let decision = if let Some(cell) = completing_cell(board, Player::Opponent) {
            Decision {
                cell,
                tier: Tier::WinNow,
            }
        } else if let Some(cell) = completing_cell(board, Player::Human) {
            Decision {
                cell,
                tier: Tier::Block,
            }
        } else if board.is_empty(Position::Center) {
            Decision {
                cell: Position::Center,
                tier: Tier::Center,
            }
        } else {
            let cell = empty[self.rng.pick(empty.len())];
            Decision {
                cell,
                tier: Tier::Random,
            }
        };

        debug!(cell = %decision.cell, tier = %decision.tier, "Opponent chose cell");
        Ok(decision)
    }

    /// Gives back the random source.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// First pattern in which `player` holds exactly two cells and the third is
/// empty; returns that third cell.
fn completing_cell(board: &Board, player: Player) -> Option<Position> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        let owned = pattern
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        if owned != 2 {
            return None;
        }
        pattern.iter().copied().find(|&pos| board.is_empty(pos))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRandom;
    use crate::Move;

    fn policy() -> OpponentPolicy<SequenceRandom> {
        OpponentPolicy::new(SequenceRandom::new([0]))
    }

    fn place(board: &mut Board, player: Player, cells: &[usize]) {
        for &i in cells {
            let pos = Position::from_index(i).unwrap();
            board.place(Move::new(player, pos)).unwrap();
        }
    }

    #[test]
    fn test_completing_cell_requires_exactly_two() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[0]);
        assert_eq!(completing_cell(&board, Player::Human), None);

        place(&mut board, Player::Human, &[1]);
        assert_eq!(completing_cell(&board, Player::Human), Some(Position::TopRight));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[0, 1]);
        place(&mut board, Player::Opponent, &[2]);
        assert_eq!(completing_cell(&board, Player::Human), None);
    }

    #[test]
    fn test_win_beats_block() {
        // O O . / X X . / . . .
        let mut board = Board::new();
        place(&mut board, Player::Opponent, &[0, 1]);
        place(&mut board, Player::Human, &[3, 4]);
        let decision = policy().decide(&board).unwrap();
        assert_eq!(decision.tier(), Tier::WinNow);
        assert_eq!(decision.cell(), Position::TopRight);
    }

    #[test]
    fn test_center_before_random() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[0]);
        let decision = policy().decide(&board).unwrap();
        assert_eq!(decision.tier(), Tier::Center);
        assert_eq!(decision.cell(), Position::Center);
    }

    #[test]
    fn test_random_picks_among_empty_cells() {
        // X . . / . O . / . . .  -> empty: 1,2,3,5,6,7,8
        let mut board = Board::new();
        place(&mut board, Player::Human, &[0]);
        place(&mut board, Player::Opponent, &[4]);
        let mut policy = OpponentPolicy::new(SequenceRandom::new([2]));
        let decision = policy.decide(&board).unwrap();
        assert_eq!(decision.tier(), Tier::Random);
        assert_eq!(decision.cell(), Position::MiddleLeft);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        place(&mut board, Player::Human, &[0, 2, 4, 5, 7]);
        place(&mut board, Player::Opponent, &[1, 3, 6, 8]);
        assert_eq!(policy().select_move(&board), Err(GameError::NoLegalMove));
    }
}
