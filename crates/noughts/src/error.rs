//! Error types for the game core.

use super::Position;

/// Error returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The targeted cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// A move was submitted while it was not that side's turn.
    #[display("Move submitted out of turn")]
    InvalidMove,

    /// The game has ended; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,

    /// The opponent was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,
}

impl GameError {
    /// True for errors caused by a stale or duplicate UI event.
    ///
    /// These are normal rejections: the caller should ignore the event and
    /// re-render the current state. Everything else is an internal invariant
    /// violation.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_) | GameError::InvalidMove | GameError::GameOver
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_vs_invariant_violations() {
        assert!(GameError::CellOccupied(Position::Center).is_rejection());
        assert!(GameError::InvalidMove.is_rejection());
        assert!(GameError::GameOver.is_rejection());
        assert!(!GameError::OutOfRange(11).is_rejection());
        assert!(!GameError::NoLegalMove.is_rejection());
    }

    #[test]
    fn test_display_mentions_cell() {
        let msg = GameError::CellOccupied(Position::TopRight).to_string();
        assert!(msg.contains("Top-right"));
        assert!(msg.contains("occupied"));
    }
}
