//! Reference driving loop.
//!
//! `run_episode` resets the engine, then repeatedly asks the turn player's
//! `Strategy` for a move and feeds it to `step` until the game ends.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::strategy::Strategy;
use crate::core::{Action, EngineError, SeatId};
use crate::engine::DurakEngine;
use crate::players::PlayerHandle;

/// Driver settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Give up after this many steps.
    pub max_steps: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }
}

/// Errors from a driven episode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("game did not finish within {steps} steps")]
    StepLimit { steps: usize },
}

/// One accepted action and what it earned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStep {
    pub seat: SeatId,
    pub action: Action,
    pub reward: f32,
    /// The step ended a round.
    pub round_ended: bool,
}

/// A finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub steps: Vec<EpisodeStep>,
    pub rounds: u32,
    /// `None` if the last players went out together.
    pub loser: Option<SeatId>,
}

impl Episode {
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps taken by one seat.
    pub fn seat_steps(&self, seat: SeatId) -> impl Iterator<Item = &EpisodeStep> {
        self.steps.iter().filter(move |s| s.seat == seat)
    }

    /// Sum of rewards credited to a seat's own steps.
    #[must_use]
    pub fn total_reward(&self, seat: SeatId) -> f32 {
        self.seat_steps(seat).map(|s| s.reward).sum()
    }
}

/// Play one full game.
///
/// # Errors
///
/// Engine errors propagate unchanged, including `IllegalAction` from a
/// strategy that returns something outside its available set. A rejected card
/// the strategy had already taken out of its hand is put back first.
pub fn run_episode<S: Strategy>(
    engine: &mut DurakEngine<S>,
    config: &SessionConfig,
) -> Result<Episode, SessionError> {
    let mut state = engine.reset()?;
    let mut steps = Vec::new();
    let mut rounds = 0;

    while !engine.is_game_over() {
        if steps.len() >= config.max_steps {
            return Err(SessionError::StepLimit {
                steps: config.max_steps,
            });
        }

        let seat = engine.turn_seat().ok_or(EngineError::GameOver)?;
        let available = engine.available_actions(seat);
        let attacking = engine.to_attack();
        let player = engine.player_mut(seat).ok_or(EngineError::GameOver)?;
        let action = if attacking {
            player.attack(&state, available)
        } else {
            player.defend(&state, available)
        };

        let transition = match engine.step(action) {
            Ok(transition) => transition,
            Err(err) => {
                if let Action::Play(card) = action {
                    if !engine.placed_cards().contains(action) {
                        if let Some(player) = engine.player_mut(seat) {
                            player.take_cards(&[card]);
                        }
                    }
                }
                return Err(err.into());
            }
        };
        if transition.round.is_some() {
            rounds += 1;
        }
        steps.push(EpisodeStep {
            seat,
            action,
            reward: transition.reward,
            round_ended: transition.round.is_some(),
        });
        state = transition.state;
    }

    debug!(steps = steps.len(), rounds, loser = ?engine.loser_seat(), "episode finished");
    Ok(Episode {
        steps,
        rounds,
        loser: engine.loser_seat(),
    })
}
