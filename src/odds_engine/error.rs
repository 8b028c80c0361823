use thiserror::Error;

use crate::odds_engine::models::Card;

/// Errors surfaced by card parsing, hand evaluation and the estimators.
#[derive(Debug, Error)]
pub enum OddsError {
    #[error("invalid card format: {0:?} (expected <rank><suit>, e.g. \"Ah\")")]
    InvalidCardFormat(String),

    #[error("deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("insufficient cards: a hand needs at least 5 cards, got {0}")]
    InsufficientCards(usize),

    #[error("duplicate card: {0}")]
    DuplicateCard(Card),

    #[error("expected 2 hole cards, got {0}")]
    WrongHoleCardCount(usize),

    #[error("too many community cards: {0} (at most 5)")]
    TooManyCommunityCards(usize),

    #[error("trial count must be greater than zero")]
    NoTrials,

    #[error("percentile index {index} out of range for {trials} trials")]
    PercentileOutOfRange { index: usize, trials: usize },

    #[error("bluff divisor must be positive and finite, got {0}")]
    InvalidDivisor(f64),

    #[error("interrupted before any trial completed")]
    Interrupted,

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OddsError>;
