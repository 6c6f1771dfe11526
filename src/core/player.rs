//! Player representation

use crate::core::{CardUid, Discipline, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Starting money for every player.
pub const STARTING_MONEY: i64 = 20;
/// Starting support for every player.
pub const STARTING_SUPPORT: i64 = 16;

/// A seat at the table: resources plus a hand of cards.
///
/// Players carry no behavior of their own; all mutation goes through the
/// engine's operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Exactly one player (the first) is human.
    pub is_human: bool,
    pub money: i64,
    pub support: i64,
    /// Industry / commerce / culture track levels.
    pub disciplines: [i64; 3],
    /// Owned cards; steady-state size is 6.
    pub hand: SmallVec<[CardUid; 8]>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, is_human: bool) -> Self {
        Player {
            id,
            name: name.into(),
            is_human,
            money: STARTING_MONEY,
            support: STARTING_SUPPORT,
            disciplines: [0; 3],
            hand: SmallVec::new(),
        }
    }

    pub fn discipline(&self, d: Discipline) -> i64 {
        self.disciplines[d.index()]
    }

    pub fn add_discipline(&mut self, d: Discipline, amount: i64) {
        self.disciplines[d.index()] += amount;
    }

    /// Remove a card from the hand; false if it was not there.
    pub fn remove_from_hand(&mut self, uid: CardUid) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == uid) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_resources() {
        let p = Player::new(PlayerId::new(0), "Player 1", true);
        assert_eq!(p.money, 20);
        assert_eq!(p.support, 16);
        assert_eq!(p.disciplines, [0, 0, 0]);
        assert!(p.hand.is_empty());
        assert!(p.is_human);
    }

    #[test]
    fn hand_removal() {
        let mut p = Player::new(PlayerId::new(1), "Player 2", false);
        p.hand.push(CardUid::new(3));
        p.hand.push(CardUid::new(4));
        assert!(p.remove_from_hand(CardUid::new(3)));
        assert!(!p.remove_from_hand(CardUid::new(3)));
        assert_eq!(p.hand.len(), 1);
    }

    #[test]
    fn discipline_accessors() {
        let mut p = Player::new(PlayerId::new(0), "Player 1", false);
        p.add_discipline(Discipline::Commerce, 2);
        assert_eq!(p.discipline(Discipline::Commerce), 2);
        assert_eq!(p.discipline(Discipline::Industry), 0);
    }
}
