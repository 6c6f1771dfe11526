//! Civica - turn-based civic card game engine
//!
//! One human seat and several automated opponents compete to occupy and
//! upgrade board fields while pushing nine bounded progress indicators; the
//! game ends when three indicators reach their maximum, and scoring rewards
//! field levels plus indicator contributions. This crate is the engine:
//! rendering and card-data storage live with the embedding application.

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod loader;

pub use error::{CivicaError, Result};
