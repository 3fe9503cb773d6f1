//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// The person at the keyboard (plays X).
    Human,
    /// The scripted opponent (plays O).
    Opponent,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Mark drawn for this player's cells.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Opponent => 'O',
        }
    }

    /// Banner shown while it is this player's turn.
    pub fn turn_banner(self) -> &'static str {
        match self {
            Player::Human => "Your Turn",
            Player::Opponent => "Computer Turn",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Opponent => write!(f, "Opponent"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}
