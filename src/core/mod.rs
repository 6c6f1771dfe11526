//! Core leaf types: identifiers, cards, players, randomness

pub mod card;
pub mod player;
pub mod rng;
pub mod types;

pub use card::{Card, CardEffects, CardResults, CardStore, Requirements};
pub use player::{Player, STARTING_MONEY, STARTING_SUPPORT};
pub use rng::GameRng;
pub use types::{CardUid, Discipline, FieldId, IndicatorId, PlayerId};
