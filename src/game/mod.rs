//! Game engine: state machine, actions, AI policy, turn driver, logging

pub mod actions;
mod ai;
pub mod driver;
pub mod engine;
pub mod indicators;
pub mod logger;
pub mod score;

pub use actions::{ActionError, ExchangeReport, PlayMode, PlayReport};
pub use driver::{EndReason, GameResult, Step, TurnDriver};
pub use engine::{GameEngine, ERA_MAX, ERA_MIN, HAND_SIZE};
pub use indicators::{IndicatorBoard, DEFAULT_MAX_INDICATOR};
pub use logger::{GameLogger, LogEntry, LogGuard, OutputMode, VerbosityLevel};
pub use score::{PlayerScore, Scoreboard};
