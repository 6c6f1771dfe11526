//! Turn driver
//!
//! The engine performs one discrete unit of work per `step` call and hands
//! control back; the caller decides pacing. There are no internal timers: a
//! UI embedding schedules `step` after each redraw, a headless run loops
//! until completion. A human seat suspends the loop unless autopilot lets
//! the AI policy drive it.

use crate::game::engine::GameEngine;
use crate::game::score::Scoreboard;

/// Outcome of one driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The current seat is human; the controller must apply the human's
    /// action and `finish_player_turn` before stepping again.
    AwaitingHuman,
    /// One automated turn was taken.
    AiActed,
    /// The game has ended; stepping further is a no-op.
    GameOver,
}

/// Why a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Three or more indicators reached their maximum.
    IndicatorsComplete,
    /// No era had cards left.
    DecksExhausted,
    /// The round cap fired before the game ended.
    RoundLimit,
}

/// Result of running a game to completion.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub end_reason: EndReason,
    pub rounds: u32,
    pub scores: Scoreboard,
}

/// Cooperative step loop over a single engine.
pub struct TurnDriver<'a> {
    engine: &'a mut GameEngine,
    autopilot: bool,
}

impl<'a> TurnDriver<'a> {
    pub fn new(engine: &'a mut GameEngine) -> Self {
        TurnDriver {
            engine,
            autopilot: false,
        }
    }

    /// Let the AI policy drive the human seat too (headless simulation).
    pub fn with_autopilot(mut self, autopilot: bool) -> Self {
        self.autopilot = autopilot;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        self.engine
    }

    /// One unit of work: either yield at a human seat or take one automated
    /// turn (action, end-condition check, turn advance).
    pub fn step(&mut self) -> Step {
        if self.engine.is_game_over() {
            return Step::GameOver;
        }
        let current = self.engine.current_player();
        let is_human = self
            .engine
            .player(current)
            .map(|p| p.is_human)
            .unwrap_or(false);
        if is_human && !self.autopilot {
            return Step::AwaitingHuman;
        }
        self.engine.ai_turn(current);
        self.engine.check_end_condition();
        self.engine.finish_player_turn();
        if self.engine.is_game_over() {
            Step::GameOver
        } else {
            Step::AiActed
        }
    }

    /// Step until the human seat or the end of the game.
    pub fn run_until_human(&mut self) -> Step {
        loop {
            match self.step() {
                Step::AiActed => continue,
                other => return other,
            }
        }
    }

    /// Drive the whole game with autopilot on, stopping at the round cap.
    pub fn run_to_completion(&mut self, max_rounds: u32) -> GameResult {
        let saved = self.autopilot;
        self.autopilot = true;
        let end_reason = loop {
            if self.engine.round() > max_rounds {
                break EndReason::RoundLimit;
            }
            match self.step() {
                Step::GameOver => {
                    break if self.engine.indicators().at_max_count() >= 3 {
                        EndReason::IndicatorsComplete
                    } else {
                        EndReason::DecksExhausted
                    };
                }
                Step::AiActed | Step::AwaitingHuman => {}
            }
        };
        self.autopilot = saved;
        GameResult {
            end_reason,
            rounds: self.engine.round(),
            scores: self.engine.compute_scores(),
        }
    }
}
