//! First-class move type.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player claiming one cell. Created once per turn and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: Position) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the targeted cell.
    pub fn cell(&self) -> Position {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell.label())
    }
}
