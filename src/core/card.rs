//! Card templates and the card store
//!
//! Cards are immutable once loaded. Decks and hands hold [`CardUid`]s; the
//! template itself lives exactly once in the [`CardStore`]. Moving a card
//! between containers moves its uid, so a card can never be duplicated or
//! stranded in two places.

use crate::core::{CardUid, Discipline, IndicatorId};
use crate::{CivicaError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What a player must have to play a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Money cost, deducted on play.
    pub price: i64,
    /// Support threshold; mode-dependent, see the play modes.
    pub support: i64,
    /// Minimum level on each discipline track (hard gate).
    pub disciplines: [i64; 3],
}

/// Resource deltas applied when the card resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResults {
    pub support: i64,
    pub disciplines: [i64; 3],
}

/// Board and indicator side effects of playing the card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffects {
    pub buildings: bool,
    pub investment: bool,
    pub social: bool,
    /// Which indicator, if any, the card raises by one.
    pub indicator: Option<IndicatorId>,
}

/// Immutable card template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique per loaded record; source ids may repeat, uids never do.
    pub uid: CardUid,
    /// Identifier from the card source (e.g. a file stem).
    pub source_id: String,
    pub title: String,
    pub description: String,
    /// Era the card belongs to (1..=6 enters play; others never reach a deck).
    pub level: u8,
    /// Numeric category 1..3 mapped to a discipline; None otherwise.
    pub kind: Option<Discipline>,
    pub requirements: Requirements,
    pub results: CardResults,
    pub effects: CardEffects,
}

impl Card {
    /// Title if present, falling back to the source id.
    pub fn display_name(&self) -> &str {
        if self.title.is_empty() {
            &self.source_id
        } else {
            &self.title
        }
    }
}

/// Central storage for card templates.
///
/// Lookup by uid plus the original load order (deck partitioning walks cards
/// in load order so shuffles stay reproducible).
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: FxHashMap<CardUid, Card>,
    order: Vec<CardUid>,
}

impl CardStore {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut store = CardStore {
            cards: FxHashMap::default(),
            order: Vec::with_capacity(cards.len()),
        };
        for card in cards {
            store.order.push(card.uid);
            store.cards.insert(card.uid, card);
        }
        store
    }

    pub fn get(&self, uid: CardUid) -> Result<&Card> {
        self.cards
            .get(&uid)
            .ok_or(CivicaError::UnknownCard(uid.as_u32()))
    }

    /// Uids in load order.
    pub fn uids(&self) -> &[CardUid] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
