//! Turn phases, outcomes and the read-only game snapshot.

use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Classification of a game after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No pattern completed and free cells remain.
    InProgress,
    /// The player completed a pattern.
    Win(Player),
    /// Board full without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }

    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// End-of-game title, from the human's point of view.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(Player::Human) => Some("You Win!"),
            Outcome::Win(Player::Opponent) => Some("You Lost!"),
            Outcome::Draw => Some("Draw"),
        }
    }

    /// End-of-game message body.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(Player::Human) => Some("Congratulation."),
            Outcome::Win(Player::Opponent) => Some("Better luck next time."),
            Outcome::Draw => Some("What a Battle"),
        }
    }

    /// Label for the control that starts the next game.
    pub fn rematch_label(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(Player::Human) => Some("Hell Yeah"),
            Outcome::Win(Player::Opponent) => Some("Rematch"),
            Outcome::Draw => Some("Try Again"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to submit a cell.
    AwaitingHuman,
    /// Waiting for the caller to trigger the opponent's turn.
    AwaitingOpponent,
    /// Game over; only a reset is accepted.
    Terminal(Outcome),
}

impl Phase {
    /// The player expected to move, if any.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::AwaitingHuman => Some(Player::Human),
            Phase::AwaitingOpponent => Some(Player::Opponent),
            Phase::Terminal(_) => None,
        }
    }

    /// Phase in which `player` is expected to move.
    pub fn awaiting(player: Player) -> Self {
        match player {
            Player::Human => Phase::AwaitingHuman,
            Player::Opponent => Phase::AwaitingOpponent,
        }
    }
}

/// Immutable snapshot handed to the presentation layer after every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    starting_player: Player,
}

impl GameState {
    pub(crate) fn new(board: Board, phase: Phase, starting_player: Player) -> Self {
        Self {
            board,
            phase,
            starting_player,
        }
    }

    /// Board contents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase of the turn machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player to move, or `None` once the game is over.
    pub fn whose_turn(&self) -> Option<Player> {
        self.phase.to_move()
    }

    /// Outcome so far.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// Player who opened this game.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// One-line status for display.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::AwaitingHuman => Player::Human.turn_banner().to_string(),
            Phase::AwaitingOpponent => Player::Opponent.turn_banner().to_string(),
            Phase::Terminal(outcome) => match (outcome.headline(), outcome.message()) {
                (Some(headline), Some(message)) => format!("{} {}", headline, message),
                _ => outcome.to_string(),
            },
        }
    }
}
