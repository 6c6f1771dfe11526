//! Black-box rules scenarios driven through the public engine API

mod common;

use civica::game::{ActionError, PlayMode, HAND_SIZE};
use common::{card, engine_with, unplayable_card};

#[test]
fn exchange_costs_hand_size_and_refills_to_six() {
    // nothing is playable, so the hand stays at 6 until the exchange
    let cards = (0..30).map(|i| unplayable_card(i, 1)).collect();
    let mut engine = engine_with(cards, 31);
    engine.start(2);
    let player = engine.players()[0].id;
    let money_before = engine.players()[0].money;

    let report = engine.exchange_hand(player).unwrap();
    assert_eq!(report.cost, HAND_SIZE as i64);
    assert_eq!(report.drawn, HAND_SIZE);
    let p = &engine.players()[0];
    assert_eq!(p.money, money_before - HAND_SIZE as i64);
    assert_eq!(p.hand.len(), HAND_SIZE);
    // the returned hand went back into the deck, so the pool size is stable
    assert_eq!(engine.deck_len(1), 30 - 2 * HAND_SIZE);
    // old hand cards are either back in the deck or redrawn, never duplicated
    let mut seen = p.hand.to_vec();
    seen.sort_by_key(|u| u.as_u32());
    seen.dedup();
    assert_eq!(seen.len(), HAND_SIZE);
}

#[test]
fn exchange_fails_without_enough_deck_cards() {
    // 13 cards: 12 dealt, 1 left in the era deck
    let cards = (0..13).map(|i| unplayable_card(i, 1)).collect();
    let mut engine = engine_with(cards, 32);
    engine.start(2);
    let player = engine.players()[0].id;
    let before = engine.players()[0].clone();

    let err = engine.exchange_hand(player).unwrap_err();
    assert_eq!(err, ActionError::DeckTooSmall { deck: 1, hand: 6 });
    assert_eq!(engine.players()[0], before);
}

#[test]
fn play_failure_leaves_player_untouched() {
    let cards = (0..20).map(|i| unplayable_card(i, 1)).collect();
    let mut engine = engine_with(cards, 33);
    engine.start(2);
    let player = engine.players()[0].id;
    let before = engine.players()[0].clone();
    let deck_before = engine.deck_len(1);

    let uid = before.hand[0];
    let err = engine.play_card(player, uid, PlayMode::Normal).unwrap_err();
    assert_eq!(err, ActionError::NotEnoughMoney);
    assert_eq!(engine.players()[0], before);
    assert_eq!(engine.deck_len(1), deck_before);
}

#[test]
fn support_gate_fails_per_mode_without_mutation() {
    // free cards whose support requirement exceeds even combined support
    let mut cards: Vec<_> = (0..20).map(|i| card(i, 1)).collect();
    for c in &mut cards {
        c.requirements.support = 100;
    }
    let mut engine = engine_with(cards, 34);
    engine.start(2);
    let player = engine.players()[0].id;
    let snapshot: Vec<_> = engine.players().to_vec();
    let uid = snapshot[0].hand[0];

    assert_eq!(
        engine.play_card(player, uid, PlayMode::Normal).unwrap_err(),
        ActionError::NotEnoughSupport { missing: 84 }
    );
    assert_eq!(
        engine.play_card(player, uid, PlayMode::Borrow).unwrap_err(),
        ActionError::BorrowShortfall {
            missing: 84,
            available: 16
        }
    );
    assert_eq!(engine.players(), snapshot.as_slice());
}

#[test]
fn dealing_auto_advances_eras() {
    // era 1 runs out mid-deal; era 2 fills the remaining hands
    let mut cards: Vec<_> = (0..8).map(|i| card(i, 1)).collect();
    cards.extend((8..24).map(|i| card(i, 2)));
    let mut engine = engine_with(cards, 35);
    engine.start(2);
    for p in engine.players() {
        assert_eq!(p.hand.len(), HAND_SIZE);
    }
    assert_eq!(engine.current_level(), 2);
    let log = engine.logger.entries().transcript();
    assert!(log.contains("Entering era 2."), "log was: {log}");
}

#[test]
fn short_deal_when_every_era_is_exhausted() {
    // only 9 cards exist in total; the second player comes up short
    let cards = (0..9).map(|i| card(i, 1)).collect();
    let mut engine = engine_with(cards, 36);
    engine.start(2);
    assert_eq!(engine.players()[0].hand.len(), 6);
    assert_eq!(engine.players()[1].hand.len(), 3);
}

#[test]
fn cards_never_duplicate_across_containers() {
    let total = 40u32;
    let cards = (0..total).map(|i| card(i, 1)).collect();
    let mut engine = engine_with(cards, 37);
    engine.start(3);
    let mut seen: Vec<u32> = Vec::new();
    for p in engine.players() {
        seen.extend(p.hand.iter().map(|u| u.as_u32()));
    }
    let in_hands = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), in_hands);
    assert_eq!(in_hands + engine.deck_len(1), total as usize);
}

#[test]
fn pass_round_pays_out_support() {
    let cards = (0..20).map(|i| unplayable_card(i, 1)).collect();
    let mut engine = engine_with(cards, 38);
    engine.start(2);
    let p0 = engine.players()[0].id;
    let p1 = engine.players()[1].id;
    let money_before: Vec<i64> = engine.players().iter().map(|p| p.money).collect();
    engine.pass(p0, "sitting out").unwrap();
    engine.finish_player_turn();
    engine.pass(p1, "sitting out").unwrap();
    engine.finish_player_turn();

    let log = engine.logger.entries().transcript();
    assert!(
        log.contains("No one played this round"),
        "log was: {log}"
    );
    // each player received money equal to their support (16)
    for (i, p) in engine.players().iter().enumerate() {
        assert_eq!(p.money, money_before[i] + 16);
    }
    assert_eq!(engine.round(), 2);
}

#[test]
fn partial_pass_round_pays_nothing() {
    let cards = (0..40).map(|i| unplayable_card(i, 1)).collect();
    let mut engine = engine_with(cards, 39);
    engine.start(2);
    let p0 = engine.players()[0].id;
    let p1 = engine.players()[1].id;
    let money_before = engine.players()[1].money;
    engine.pass(p0, "sitting out").unwrap();
    engine.finish_player_turn();
    // player 2 exchanges successfully instead of passing
    engine.exchange_hand(p1).unwrap();
    engine.finish_player_turn();
    let log = engine.logger.entries().transcript();
    assert!(!log.contains("No one played this round"), "log was: {log}");
    assert_eq!(engine.players()[1].money, money_before - 6);
}
