//! Crate-level error types

use thiserror::Error;

/// Errors that abort engine construction or card loading.
///
/// Failures inside a running game never use this type; engine operations
/// return [`crate::game::ActionError`] instead, which callers report and
/// recover from.
#[derive(Error, Debug)]
pub enum CivicaError {
    #[error("invalid card data: {0}")]
    InvalidCardData(String),

    #[error("unknown card uid: {0}")]
    UnknownCard(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CivicaError>;
