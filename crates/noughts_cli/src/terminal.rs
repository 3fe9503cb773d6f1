//! Line-based terminal front end.
//!
//! Renders each snapshot, reads the human's cell from input, and owns the
//! pacing delay before the opponent moves. The engine itself never waits.

use crate::config::PlayConfig;
use anyhow::Result;
use noughts::{GameEngine, GameState, Outcome, Phase, Player, Position, RandomSource};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, instrument, warn};

/// Running tally of finished games in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Games the human won.
    pub wins: u32,
    /// Games the opponent won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Counts a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::Human) => self.wins += 1,
            Outcome::Win(Player::Opponent) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Computer ({} drawn)",
            self.wins, self.losses, self.draws
        )
    }
}

/// Plays games until input ends or the player quits.
#[instrument(skip_all)]
pub async fn run_session<R, I, W>(
    engine: &mut GameEngine<R>,
    config: &PlayConfig,
    input: I,
    out: &mut W,
) -> Result<Scoreboard>
where
    R: RandomSource,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut score = Scoreboard::default();
    info!("Session started");

    loop {
        let state = engine.current_state();
        render(&state, out)?;

        match state.phase() {
            Phase::AwaitingOpponent => {
                let delay = if state.board().empty_cells().len() == 9 {
                    *config.opening_delay_ms()
                } else {
                    *config.opponent_delay_ms()
                };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                engine.run_opponent_turn()?;
            }
            Phase::AwaitingHuman => {
                write!(out, "Choose a cell (1-9), or q to quit: ")?;
                out.flush()?;
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    break;
                }
                let Some(pos) = Position::from_label_or_number(line) else {
                    writeln!(out, "'{}' is not a cell.", line)?;
                    continue;
                };
                submit(engine, pos, out)?;
            }
            Phase::Terminal(outcome) => {
                score.record(outcome);
                info!(%outcome, %score, "Game finished");
                writeln!(out, "{}", score)?;
                write!(out, "{}? [Y/n] ", outcome.rematch_label().unwrap_or("Play again"))?;
                out.flush()?;
                let Some(line) = lines.next_line().await? else {
                    break;
                };
                if matches!(line.trim(), "n" | "N" | "q" | "Q") {
                    break;
                }
                engine.reset();
            }
        }
    }

    info!(%score, "Session ended");
    Ok(score)
}

/// Forwards a human move, swallowing stale-input rejections.
fn submit<R: RandomSource, W: Write>(
    engine: &mut GameEngine<R>,
    pos: Position,
    out: &mut W,
) -> Result<()> {
    match engine.submit_human_move(pos.to_index()) {
        Ok(_) => Ok(()),
        Err(e) if e.is_rejection() => {
            warn!(error = %e, "Move rejected");
            writeln!(out, "{}.", e)?;
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Engine invariant violated");
            Err(e.into())
        }
    }
}

/// Writes the board with a status line.
pub fn render<W: Write>(state: &GameState, out: &mut W) -> std::io::Result<()> {
    debug!(phase = ?state.phase(), "Rendering");
    writeln!(out)?;
    writeln!(out, "{}", state.board().display())?;
    writeln!(out, "{}", state.status_string())?;
    Ok(())
}
