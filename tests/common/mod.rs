//! Shared fixtures for integration tests

// each test binary compiles this module separately and may not use every helper
#![allow(dead_code)]

use civica::core::{Card, CardEffects, CardResults, CardUid, Requirements};
use civica::game::{GameEngine, OutputMode};

/// A blank card in the given era: free, no requirements, no effects.
pub fn card(uid: u32, level: u8) -> Card {
    Card {
        uid: CardUid::new(uid),
        source_id: format!("card-{uid}"),
        title: format!("Card {uid}"),
        description: String::new(),
        level,
        kind: None,
        requirements: Requirements::default(),
        results: CardResults::default(),
        effects: CardEffects::default(),
    }
}

/// A card nobody can afford (blocks all play modes through the money gate).
pub fn unplayable_card(uid: u32, level: u8) -> Card {
    let mut c = card(uid, level);
    c.requirements.price = 1000;
    c
}

/// Engine with logs captured in memory instead of stdout.
pub fn engine_with(cards: Vec<Card>, seed: u64) -> GameEngine {
    let mut engine = GameEngine::new(cards, Some(seed));
    engine.logger.set_output_mode(OutputMode::Memory);
    engine
}
