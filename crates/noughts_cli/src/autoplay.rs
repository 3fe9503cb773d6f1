//! Unattended games: the opponent against a first-free-cell player.

use crate::terminal::Scoreboard;
use anyhow::Result;
use noughts::{GameEngine, GameState, Phase, Position, RandomSource};
use tracing::{debug, info, instrument};

/// Returns the first empty cell on the board.
pub fn pick_move(state: &GameState) -> Option<Position> {
    Position::ALL
        .iter()
        .copied()
        .find(|&pos| state.board().is_empty(pos))
}

/// Plays `games` games back to back and tallies them from the simple
/// player's side. Openers alternate through [`GameEngine::reset`].
#[instrument(skip(engine))]
pub fn run<R: RandomSource>(engine: &mut GameEngine<R>, games: u32) -> Result<Scoreboard> {
    let mut score = Scoreboard::default();

    for game in 0..games {
        if game > 0 {
            engine.reset();
        }
        let outcome = loop {
            let state = engine.current_state();
            match state.phase() {
                Phase::AwaitingHuman => {
                    let pos = pick_move(&state)
                        .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
                    engine.submit_human_move(pos.to_index())?;
                }
                Phase::AwaitingOpponent => {
                    engine.run_opponent_turn()?;
                }
                Phase::Terminal(outcome) => break outcome,
            }
        };
        debug!(game, %outcome, "Game finished");
        score.record(outcome);
    }

    info!(%score, "Autoplay finished");
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::SequenceRandom;

    #[test]
    fn test_every_game_is_counted() {
        let mut engine = GameEngine::new(SequenceRandom::new([3, 1, 4, 1, 5]));
        let score = run(&mut engine, 25).unwrap();
        assert_eq!(score.wins + score.losses + score.draws, 25);
    }

    #[test]
    fn test_simple_player_loses_to_block_then_win() {
        // X takes 0, 1 (blocked at 2), then 3; O answers 4, 2 and wins on 6.
        let mut engine = GameEngine::new(SequenceRandom::new([0]));
        let score = run(&mut engine, 1).unwrap();
        assert_eq!(score.losses, 1);
    }
}
