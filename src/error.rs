use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("Invalid rank: {0}")]
    InvalidRank(char),

    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Invalid card notation: {0}")]
    InvalidCardNotation(String),

    #[error("Need at least {need} cards, got {got}")]
    NotEnoughCards { need: usize, got: usize },

    #[error("A hand must be exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    #[error("Cannot deal {requested} cards, only {available} remaining")]
    NotEnoughDeck { requested: usize, available: usize },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type RankResult<T> = Result<T, RankError>;
