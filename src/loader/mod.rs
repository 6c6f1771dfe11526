//! Card source loading
//!
//! The engine only needs the card list enumerated once at game start; this
//! module turns the external JSON source into typed cards.

pub mod card;

pub use card::{CardLoader, CardSet};
