use thiserror::Error;

use crate::{PairCount, Position};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card position {0}")]
    InvalidPosition(Position),
    #[error("Invalid level index {0}")]
    InvalidLevel(usize),
    #[error("Action is not available in the current phase")]
    InvalidTransition,
    #[error("Level already ended, no new flips are accepted")]
    LevelOver,
    #[error("Deck must hold every symbol exactly twice")]
    InvalidDeck,
}

pub type Result<T, E = GameError> = core::result::Result<T, E>;

/// Problems with the static level catalog or symbol pool, detected at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Level catalog is empty")]
    NoLevels,
    #[error("Symbol pool is empty")]
    NoSymbols,
    #[error("Level {id:?} must deal at least one pair")]
    NoPairs { id: &'static str },
    #[error("Level {id:?} needs {pairs} pairs but the symbol pool only has {available}")]
    TooManyPairs {
        id: &'static str,
        pairs: PairCount,
        available: usize,
    },
    #[error("Level id {0:?} is used more than once")]
    DuplicateLevel(&'static str),
    #[error("Symbol {0:?} appears more than once in the pool")]
    DuplicateSymbol(&'static str),
}
