//! The 3x3 board: the authoritative cell store.

use super::action::Move;
use super::error::GameError;
use super::types::{Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// A cell, once occupied, is only cleared by [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks whether a raw cell index is occupied.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `cell` is not in 0-8.
    pub fn is_occupied(&self, cell: usize) -> Result<bool, GameError> {
        let pos = Position::try_from(cell)?;
        Ok(!self.is_empty(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Claims the move's cell for the move's player.
    ///
    /// Whose turn it is is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOccupied`] if the cell already holds a mark;
    /// the board is left untouched.
    #[instrument(skip(self))]
    pub fn place(&mut self, mv: Move) -> Result<(), GameError> {
        let cell = mv.cell();
        if !self.is_empty(cell) {
            return Err(GameError::CellOccupied(cell));
        }
        self.squares[cell.to_index()] = Square::Occupied(mv.player());
        trace!("Mark placed");
        Ok(())
    }

    /// Cells owned by `player`.
    pub fn occupied_cells(&self, player: Player) -> BTreeSet<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.get(pos) == Square::Occupied(player))
            .collect()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of marks owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// True iff all 9 cells are occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Clears every cell. Idempotent.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so the text doubles as a key
    /// for move entry.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(player) => result.push(player.mark()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
