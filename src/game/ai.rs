//! AI policy for automated seats
//!
//! The policy prefers a uniformly random card playable outright, then one
//! playable with borrowed support, then one worth an undecided attempt. When
//! no card qualifies it tries a hand exchange and finally passes. Every
//! invocation consumes exactly one turn; the driver calls
//! `finish_player_turn` afterwards.

use crate::core::{CardUid, PlayerId};
use crate::game::actions::PlayMode;
use crate::game::engine::GameEngine;

impl GameEngine {
    /// Pick a card and mode for an automated player, or None if the hand
    /// offers nothing. Ties break uniformly via the game RNG.
    pub fn pick_card_for_ai(&mut self, player: PlayerId) -> Option<(CardUid, PlayMode)> {
        let hand: Vec<CardUid> = self.player(player)?.hand.to_vec();
        for mode in [PlayMode::Normal, PlayMode::Borrow, PlayMode::Undecided] {
            let candidates: Vec<CardUid> = hand
                .iter()
                .copied()
                .filter(|&uid| self.can_play(player, uid, mode))
                .collect();
            if !candidates.is_empty() {
                let pick = candidates[self.pick_uniform(candidates.len())];
                return Some((pick, mode));
            }
        }
        None
    }

    /// Run one automated turn: play the picked card, else exchange, else
    /// pass with the exchange failure as the reason. Outcomes are logged;
    /// failures never escape, the turn is consumed either way.
    pub fn ai_turn(&mut self, player: PlayerId) {
        if self.is_game_over() {
            return;
        }
        if let Some((card, mode)) = self.pick_card_for_ai(player) {
            if let Err(err) = self.play_card(player, card, mode) {
                self.logger.normal(&err.to_string());
            }
            return;
        }
        if let Err(err) = self.exchange_hand(player) {
            let reason = err.to_string();
            let _ = self.pass(player, &reason);
        }
    }
}
