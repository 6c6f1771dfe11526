//! Final scoring
//!
//! A player scores one point per occupation level on every field they hold
//! (all three field types) plus one point per unit of indicator progress they
//! contributed over the whole game.

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub name: String,
    /// Sum of occupation levels over the player's fields.
    pub field_points: u32,
    /// Sum of recorded indicator contributions.
    pub indicator_points: u32,
    pub total: u32,
}

/// Scores for all players, in seat order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub entries: Vec<PlayerScore>,
}

impl Scoreboard {
    /// One-line breakdown used in the game-over notification.
    pub fn summary_line(&self) -> String {
        self.entries
            .iter()
            .map(|s| {
                format!(
                    "{}: {} (fields {} + indicators {})",
                    s.name, s.total, s.field_points, s.indicator_points
                )
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Winner(s) by total; ties return every leader, empty only before start.
    pub fn leaders(&self) -> Vec<&PlayerScore> {
        let best = self.entries.iter().map(|s| s.total).max().unwrap_or(0);
        self.entries.iter().filter(|s| s.total == best).collect()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_line())
    }
}
