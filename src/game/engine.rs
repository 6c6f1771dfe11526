//! The game engine: decks, turns, rounds, card resolution, end conditions
//!
//! One `GameEngine` instance exclusively owns all game state. Callers drive
//! it through the operation methods (`play_card`, `exchange_hand`, `pass`,
//! `finish_player_turn`); nothing mutates the state from outside. The engine
//! is strictly sequential, so a concurrent embedding must serialize calls per
//! instance.
//!
//! Validation always precedes mutation: an operation that returns an error
//! has changed nothing (the RNG stream is the one exception, since a failed
//! undecided attempt still consumes its draw).

use crate::board::{Board, BoardConfig, FieldType};
use crate::core::{Card, CardStore, CardUid, Discipline, GameRng, Player, PlayerId};
use crate::game::actions::{ActionError, ExchangeReport, PlayMode, PlayReport};
use crate::game::indicators::{IndicatorBoard, DEFAULT_MAX_INDICATOR};
use crate::game::logger::GameLogger;
use crate::game::score::{PlayerScore, Scoreboard};
use std::collections::VecDeque;

/// First era with a deck.
pub const ERA_MIN: u8 = 1;
/// Last era with a deck.
pub const ERA_MAX: u8 = 6;
/// Steady-state hand size; deals and exchanges refill to this.
pub const HAND_SIZE: usize = 6;

pub struct GameEngine {
    store: CardStore,
    /// One deck per era, index `era - 1`; consumed from the front.
    decks: Vec<VecDeque<CardUid>>,
    players: Vec<Player>,
    board: Board,
    board_config: BoardConfig,
    indicators: IndicatorBoard,
    max_indicator: u8,
    current_level: u8,
    current_player: usize,
    round: u32,
    round_passes: usize,
    round_cannot_exchange: usize,
    round_any_played: bool,
    game_over: bool,
    rng: GameRng,
    pub logger: GameLogger,
}

impl GameEngine {
    /// Build an engine over a card set. `seed` makes the whole game
    /// reproducible; `None` falls back to OS entropy.
    pub fn new(cards: Vec<Card>, seed: Option<u64>) -> Self {
        GameEngine {
            store: CardStore::from_cards(cards),
            decks: Vec::new(),
            players: Vec::new(),
            board: Board::default(),
            board_config: BoardConfig::default(),
            indicators: IndicatorBoard::new(DEFAULT_MAX_INDICATOR, 0),
            max_indicator: DEFAULT_MAX_INDICATOR,
            current_level: ERA_MIN,
            current_player: 0,
            round: 1,
            round_passes: 0,
            round_cannot_exchange: 0,
            round_any_played: false,
            game_over: false,
            rng: match seed {
                Some(seed) => GameRng::seeded(seed),
                None => GameRng::from_entropy(),
            },
            logger: GameLogger::new(),
        }
    }

    /// Override the board shape for the next `start`.
    pub fn with_board_config(mut self, config: BoardConfig) -> Self {
        self.board_config = config;
        self
    }

    /// Begin a fresh game. The first player is the human seat.
    pub fn start(&mut self, num_players: usize) {
        self.players = (0..num_players)
            .map(|i| {
                Player::new(
                    PlayerId::new(i as u32),
                    format!("Player {}", i + 1),
                    i == 0,
                )
            })
            .collect();
        self.board = Board::new(self.board_config);
        self.indicators = IndicatorBoard::new(self.max_indicator, num_players);

        // One shuffled deck per era; cards outside 1..=6 never enter play.
        let mut decks = Vec::with_capacity(ERA_MAX as usize);
        for level in ERA_MIN..=ERA_MAX {
            let mut cards: Vec<CardUid> = Vec::new();
            for &uid in self.store.uids() {
                if let Ok(card) = self.store.get(uid) {
                    if card.level == level {
                        cards.push(uid);
                    }
                }
            }
            self.rng.shuffle(&mut cards);
            decks.push(VecDeque::from(cards));
        }
        self.decks = decks;

        self.current_level = ERA_MIN;
        while self.current_level <= ERA_MAX && self.current_deck().is_empty() {
            if !self.advance_level() {
                break;
            }
        }

        self.current_player = 0;
        self.round = 1;
        self.round_passes = 0;
        self.round_cannot_exchange = 0;
        self.round_any_played = false;
        self.game_over = false;

        self.deal_initial();
        self.logger.normal(&format!(
            "New game: {num_players} players. Round 1 begins."
        ));
    }

    fn deal_initial(&mut self) {
        for idx in 0..self.players.len() {
            for _ in 0..HAND_SIZE {
                if let Some(uid) = self.draw_card() {
                    self.players[idx].hand.push(uid);
                }
            }
        }
    }

    fn current_deck(&self) -> &VecDeque<CardUid> {
        &self.decks[(self.current_level - 1) as usize]
    }

    /// Pop the front of the current era's deck, auto-advancing eras as decks
    /// empty. None when every era is exhausted.
    pub(crate) fn draw_card(&mut self) -> Option<CardUid> {
        while self.current_level <= ERA_MAX {
            let idx = (self.current_level - 1) as usize;
            if let Some(uid) = self.decks[idx].pop_front() {
                return Some(uid);
            }
            if !self.advance_level() {
                break;
            }
        }
        None
    }

    /// Adopt the first later era whose deck still has cards.
    fn advance_level(&mut self) -> bool {
        for level in (self.current_level + 1)..=ERA_MAX {
            if !self.decks[(level - 1) as usize].is_empty() {
                self.current_level = level;
                self.logger.normal(&format!("Entering era {level}."));
                return true;
            }
        }
        false
    }

    fn player_index(&self, player: PlayerId) -> Result<usize, ActionError> {
        if player.index() < self.players.len() {
            Ok(player.index())
        } else {
            Err(ActionError::UnknownPlayer(player))
        }
    }

    /// Combined support of everyone except `player`.
    fn borrowable_support(&self, player: PlayerId) -> i64 {
        self.players
            .iter()
            .filter(|p| p.id != player)
            .map(|p| p.support)
            .sum()
    }

    /// Check whether a card could be played under the given mode. Money and
    /// discipline gates are mode-independent; the support gate depends on the
    /// mode, and Undecided always passes it (resolution may still fail).
    pub fn can_play(&self, player: PlayerId, card: CardUid, mode: PlayMode) -> bool {
        let Some(p) = self.players.get(player.index()) else {
            return false;
        };
        let Ok(card) = self.store.get(card) else {
            return false;
        };
        let req = &card.requirements;
        if p.money < req.price {
            return false;
        }
        if Discipline::ALL
            .iter()
            .any(|&d| p.discipline(d) < req.disciplines[d.index()])
        {
            return false;
        }
        let missing = (req.support - p.support).max(0);
        match mode {
            PlayMode::Normal => missing <= 0,
            PlayMode::Borrow => missing <= self.borrowable_support(player),
            PlayMode::Undecided => true,
        }
    }

    /// Hand cards playable without help (Normal mode).
    pub fn playable_cards(&self, player: PlayerId) -> Vec<CardUid> {
        let Some(p) = self.players.get(player.index()) else {
            return Vec::new();
        };
        p.hand
            .iter()
            .copied()
            .filter(|&uid| self.can_play(player, uid, PlayMode::Normal))
            .collect()
    }

    /// Play a card from the player's hand.
    ///
    /// On failure nothing changes (an Undecided failure still consumes its
    /// RNG draw). On success the card leaves the hand, costs and results
    /// apply, board effects place or upgrade fields, the card's indicator
    /// (if any) rises by one, and a replacement card is drawn.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        card_uid: CardUid,
        mode: PlayMode,
    ) -> Result<PlayReport, ActionError> {
        if self.game_over {
            return Err(ActionError::GameOver);
        }
        let player_idx = self.player_index(player)?;
        if !self.players[player_idx].hand.contains(&card_uid) {
            return Err(ActionError::CardNotInHand);
        }
        let card = self
            .store
            .get(card_uid)
            .map_err(|_| ActionError::CardNotInHand)?
            .clone();

        let (money, support) = {
            let p = &self.players[player_idx];
            (p.money, p.support)
        };
        let req = &card.requirements;
        if money < req.price {
            return Err(ActionError::NotEnoughMoney);
        }
        if Discipline::ALL.iter().any(|&d| {
            self.players[player_idx].discipline(d) < req.disciplines[d.index()]
        }) {
            return Err(ActionError::MissingDisciplines);
        }

        let missing = (req.support - support).max(0);
        let mut borrowed = 0i64;
        let mut undecided_gain = 0i64;
        if missing > 0 {
            match mode {
                PlayMode::Borrow => {
                    let available = self.borrowable_support(player);
                    if available < missing {
                        return Err(ActionError::BorrowShortfall { missing, available });
                    }
                    // one-time loan: satisfies the requirement without
                    // touching anyone's support
                    borrowed = missing;
                }
                PlayMode::Undecided => {
                    let gain =
                        ((self.rng.next_f64() * (missing + 2) as f64) as i64).max(1);
                    if support + gain < req.support {
                        return Err(ActionError::UndecidedShortfall {
                            gain,
                            shortfall: req.support - (support + gain),
                        });
                    }
                    undecided_gain = gain;
                }
                PlayMode::Normal => {
                    return Err(ActionError::NotEnoughSupport { missing });
                }
            }
        }

        {
            let p = &mut self.players[player_idx];
            // permanent gain, unlike borrowed support
            p.support += undecided_gain;
            p.remove_from_hand(card_uid);
            p.money -= card.requirements.price;
            p.support += card.results.support;
            for d in Discipline::ALL {
                p.disciplines[d.index()] += card.results.disciplines[d.index()];
            }
            if let Some(kind) = card.kind {
                p.add_discipline(kind, 1);
            }
        }

        let effect_flags = [
            (FieldType::Buildings, card.effects.buildings),
            (FieldType::Investment, card.effects.investment),
            (FieldType::Social, card.effects.social),
        ];
        let mut placements = Vec::new();
        for (field_type, flagged) in effect_flags {
            if !flagged {
                continue;
            }
            let placement = self.board.place_with_effect(field_type, player, false);
            match placement {
                Some(p) => self.logger.verbose(&format!("{field_type}: {p}")),
                None => self
                    .logger
                    .verbose(&ActionError::NoFieldAvailable(field_type).to_string()),
            }
            placements.push((field_type, placement));
        }

        let mut indicator = None;
        if let Some(id) = card.effects.indicator {
            let applied = self.indicators.raise(id, player, 1);
            if applied > 0 {
                indicator = Some((id, applied));
                self.logger
                    .verbose(&format!("indicator {id} raised to {}", self.indicators.value(id)));
            }
        }

        if let Some(replacement) = self.draw_card() {
            self.players[player_idx].hand.push(replacement);
        }
        self.round_any_played = true;

        let report = PlayReport {
            player,
            player_name: self.players[player_idx].name.clone(),
            card: card_uid,
            card_title: card.display_name().to_string(),
            mode,
            borrowed,
            undecided_gain,
            placements,
            indicator,
        };
        self.logger.normal(&report.summary());
        Ok(report)
    }

    /// Exchange the whole hand: pay one money per held card, return the hand
    /// to the current era's deck, reshuffle, and draw up to six back.
    pub fn exchange_hand(&mut self, player: PlayerId) -> Result<ExchangeReport, ActionError> {
        if self.game_over {
            return Err(ActionError::GameOver);
        }
        let player_idx = self.player_index(player)?;
        if self.decks.is_empty() {
            return Err(ActionError::NoDeckAvailable);
        }

        let needed = self.players[player_idx].hand.len();
        if self.current_deck().is_empty() {
            self.advance_level();
        }
        let deck_len = self.current_deck().len();
        if deck_len < needed {
            return Err(ActionError::DeckTooSmall {
                deck: deck_len,
                hand: needed,
            });
        }
        let cost = needed as i64;
        if self.players[player_idx].money < cost {
            return Err(ActionError::CannotAffordExchange { cost });
        }

        self.players[player_idx].money -= cost;
        let hand: Vec<CardUid> = self.players[player_idx].hand.drain(..).collect();
        let deck_idx = (self.current_level - 1) as usize;
        self.decks[deck_idx].extend(hand);
        let deck = &mut self.decks[deck_idx];
        self.rng.shuffle(deck.make_contiguous());

        let mut drawn = 0;
        for _ in 0..HAND_SIZE {
            match self.decks[deck_idx].pop_front() {
                Some(uid) => {
                    self.players[player_idx].hand.push(uid);
                    drawn += 1;
                }
                None => break,
            }
        }

        self.logger.normal(&format!(
            "{} exchanges their hand (cost {cost} money).",
            self.players[player_idx].name
        ));
        Ok(ExchangeReport {
            player,
            cost,
            drawn,
        })
    }

    /// Pass the turn. Always succeeds in a live game; counts toward both the
    /// round's pass total and its cannot-exchange total (the automated path
    /// only passes when an exchange already failed, so the counters move in
    /// lockstep).
    pub fn pass(&mut self, player: PlayerId, reason: &str) -> Result<(), ActionError> {
        if self.game_over {
            return Err(ActionError::GameOver);
        }
        let player_idx = self.player_index(player)?;
        self.round_passes += 1;
        self.round_cannot_exchange += 1;
        self.logger.normal(&format!(
            "{} passes ({reason}).",
            self.players[player_idx].name
        ));
        Ok(())
    }

    /// Forced payout when an entire round goes by without a play or a
    /// successful exchange: everyone earns their support in money, and every
    /// occupied investment field pays its occupant its level.
    fn pay_investments(&mut self) {
        for idx in 0..self.players.len() {
            let gain = self.players[idx].support;
            self.players[idx].money += gain;
            self.logger.normal(&format!(
                "{} receives {gain} money for their support.",
                self.players[idx].name
            ));
        }
        let payouts: Vec<_> = self
            .board
            .fields()
            .iter()
            .filter(|f| f.field_type == FieldType::Investment)
            .filter_map(|f| f.occupant.map(|owner| (owner, f.id, f.occupation_level)))
            .collect();
        for (owner, field, level) in payouts {
            self.players[owner.index()].money += level as i64;
            self.logger.normal(&format!(
                "{} collects {level} money from investment field {field}.",
                self.players[owner.index()].name
            ));
        }
    }

    /// Advance the turn to the next player; at the round boundary run the
    /// payout check, the end condition, era advancement, and counter resets.
    pub fn finish_player_turn(&mut self) {
        if self.game_over || self.players.is_empty() {
            return;
        }
        self.current_player += 1;
        if self.current_player < self.players.len() {
            return;
        }

        if self.round_passes == self.players.len()
            && self.round_cannot_exchange == self.players.len()
        {
            self.logger
                .normal("No one played this round; paying out support and investments.");
            self.pay_investments();
        }
        self.check_end_condition();
        if !self.game_over && self.current_deck().is_empty() && !self.advance_level() {
            self.logger
                .minimal("Game over: no cards left for further eras.");
            self.game_over = true;
        }
        self.round += 1;
        self.current_player = 0;
        self.round_passes = 0;
        self.round_cannot_exchange = 0;
        self.round_any_played = false;
    }

    /// The game ends once at least three indicators sit at their maximum.
    /// Sticky: once over, stays over.
    pub fn check_end_condition(&mut self) -> bool {
        if self.game_over {
            return true;
        }
        if self.indicators.at_max_count() >= 3 {
            self.game_over = true;
            self.logger
                .minimal("Game over: at least 3 indicators reached their maximum.");
            let scores = self.compute_scores();
            self.logger
                .minimal(&format!("Final scores: {}", scores.summary_line()));
        }
        self.game_over
    }

    /// Per-player score breakdown; read-only, valid at any point.
    pub fn compute_scores(&self) -> Scoreboard {
        Scoreboard {
            entries: self
                .players
                .iter()
                .map(|p| {
                    let field_points = self.board.player_points(p.id);
                    let indicator_points = self.indicators.player_total(p.id);
                    PlayerScore {
                        player: p.id,
                        name: p.name.clone(),
                        field_points,
                        indicator_points,
                        total: field_points + indicator_points,
                    }
                })
                .collect(),
        }
    }

    // --- read-only queries ---

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        self.store.get(uid).ok()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn indicators(&self) -> &IndicatorBoard {
        &self.indicators
    }

    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current_player as u32)
    }

    pub fn current_level(&self) -> u8 {
        self.current_level
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether any card has been played in the current round.
    pub fn round_had_play(&self) -> bool {
        self.round_any_played
    }

    /// Cards remaining in an era's deck.
    pub fn deck_len(&self, level: u8) -> usize {
        if (ERA_MIN..=ERA_MAX).contains(&level) {
            self.decks
                .get((level - 1) as usize)
                .map(|d| d.len())
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Uniform pick driven by the shared RNG stream (AI tie-breaks).
    pub(crate) fn pick_uniform(&mut self, len: usize) -> usize {
        self.rng.pick_index(len)
    }
}
