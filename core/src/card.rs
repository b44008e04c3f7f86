use serde::Serialize;

use crate::{Position, Symbol};

/// A dealt card. Never changes once the deck is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub position: Position,
    pub symbol: Symbol,
}

/// What the player currently sees at a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "face", content = "symbol", rename_all = "snake_case")]
pub enum CardFace {
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
}

impl CardFace {
    pub const fn is_face_up(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Hidden => None,
            Self::Revealed(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }
}

impl Default for CardFace {
    fn default() -> Self {
        Self::Hidden
    }
}
