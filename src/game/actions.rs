//! Player actions: play modes, failure reasons, and action reports
//!
//! Every engine operation returns a structured result. Failures carry a
//! message via `Display` and guarantee that no state was mutated; successes
//! carry a report the caller (or the engine's own log) can summarize.

use crate::board::{FieldType, Placement};
use crate::core::{CardUid, IndicatorId, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How a card's support requirement is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    /// Own support must meet the requirement.
    Normal,
    /// Other players' combined support may cover the gap (one-time, no state
    /// change on anyone).
    Borrow,
    /// A random support gain is attempted; permanent on success.
    Undecided,
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayMode::Normal => "normal",
            PlayMode::Borrow => "borrow",
            PlayMode::Undecided => "undecided",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(PlayMode::Normal),
            "borrow" => Ok(PlayMode::Borrow),
            "undecided" => Ok(PlayMode::Undecided),
            _ => Err(format!(
                "invalid play mode '{s}' (expected: normal, borrow, undecided)"
            )),
        }
    }
}

/// Why an engine operation refused to run. No state is mutated when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("card is not in the player's hand")]
    CardNotInHand,

    #[error("not enough money to play this card")]
    NotEnoughMoney,

    #[error("discipline requirements not met")]
    MissingDisciplines,

    #[error("not enough support (missing {missing})")]
    NotEnoughSupport { missing: i64 },

    #[error("other players cannot lend enough support ({available} available, {missing} needed)")]
    BorrowShortfall { missing: i64, available: i64 },

    #[error("failed to convince the undecided (+{gain}, still {shortfall} short)")]
    UndecidedShortfall { gain: i64, shortfall: i64 },

    #[error("no deck available")]
    NoDeckAvailable,

    #[error("the current era has too few cards to exchange ({deck} in deck, {hand} in hand)")]
    DeckTooSmall { deck: usize, hand: usize },

    #[error("not enough money to exchange the hand (cost {cost})")]
    CannotAffordExchange { cost: i64 },

    #[error("no available {0} field")]
    NoFieldAvailable(FieldType),
}

/// Successful card play: everything that happened, for logging and UI.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayReport {
    pub player: PlayerId,
    pub player_name: String,
    pub card: CardUid,
    pub card_title: String,
    pub mode: PlayMode,
    /// Support covered by other players (Borrow mode), zero otherwise.
    pub borrowed: i64,
    /// Permanent support gained from the undecided, zero otherwise.
    pub undecided_gain: i64,
    /// Board placements the card's effects produced, in effect order.
    pub placements: Vec<(FieldType, Option<Placement>)>,
    /// Indicator raised by this play, with the applied amount.
    pub indicator: Option<(IndicatorId, u8)>,
}

impl PlayReport {
    /// One-line summary in the shape the log sink expects.
    pub fn summary(&self) -> String {
        let mut note = String::new();
        if self.borrowed > 0 {
            note = format!(" (borrowed {} support)", self.borrowed);
        }
        if self.undecided_gain > 0 {
            note = format!(" (+{} from the undecided)", self.undecided_gain);
        }
        format!("{} plays {}{}", self.player_name, self.card_title, note)
    }
}

/// Successful hand exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeReport {
    pub player: PlayerId,
    pub cost: i64,
    /// Cards drawn back; below 6 only if the deck ran out.
    pub drawn: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_mode_parses_case_insensitively() {
        assert_eq!("Borrow".parse::<PlayMode>(), Ok(PlayMode::Borrow));
        assert_eq!("normal".parse::<PlayMode>(), Ok(PlayMode::Normal));
        assert!("loan".parse::<PlayMode>().is_err());
    }

    #[test]
    fn report_summary_mentions_mode_extras() {
        let mut report = PlayReport {
            player: PlayerId::new(0),
            player_name: "Player 1".to_string(),
            card: CardUid::new(9),
            card_title: "Granary".to_string(),
            mode: PlayMode::Normal,
            borrowed: 0,
            undecided_gain: 0,
            placements: Vec::new(),
            indicator: None,
        };
        assert_eq!(report.summary(), "Player 1 plays Granary");
        report.borrowed = 3;
        assert_eq!(report.summary(), "Player 1 plays Granary (borrowed 3 support)");
        report.borrowed = 0;
        report.undecided_gain = 2;
        assert_eq!(
            report.summary(),
            "Player 1 plays Granary (+2 from the undecided)"
        );
    }

    #[test]
    fn errors_render_messages() {
        let err = ActionError::BorrowShortfall {
            missing: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "other players cannot lend enough support (5 available, 6 needed)"
        );
    }
}
