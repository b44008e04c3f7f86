use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;

use crate::*;
pub use shuffled::*;

mod shuffled;

pub trait DeckGenerator {
    fn generate(self, pair_count: PairCount, pool: &SymbolPool) -> Deck;
}

/// Cards of one level attempt, in board order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Lays out `symbols` in the given order, checking that each appears exactly twice.
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        let symbols: Vec<_> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(GameError::InvalidDeck);
        }

        let mut counts = BTreeMap::new();
        for &symbol in &symbols {
            *counts.entry(symbol).or_insert(0usize) += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::InvalidDeck);
        }

        Ok(Self::from_arranged(symbols))
    }

    pub(crate) fn from_arranged(symbols: Vec<Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| Card { position, symbol })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn validate_position(&self, position: Position) -> Result<Position> {
        if position < self.cards.len() {
            Ok(position)
        } else {
            Err(GameError::InvalidPosition(position))
        }
    }

    pub fn symbol_at(&self, position: Position) -> Symbol {
        self[position].symbol
    }

    /// Arrangement of symbols, ignoring positions.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().map(|card| card.symbol)
    }
}

impl Index<Position> for Deck {
    type Output = Card;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cards[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOG: Symbol = Symbol::new("🐶");
    const CAT: Symbol = Symbol::new("🐱");

    #[test]
    fn from_symbols_keeps_order_and_assigns_positions() {
        let deck = Deck::from_symbols([DOG, CAT, DOG, CAT]).unwrap();

        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck[2], Card { position: 2, symbol: DOG });
        assert_eq!(deck.symbol_at(3), CAT);
        assert_eq!(deck.validate_position(4), Err(GameError::InvalidPosition(4)));
    }

    #[test]
    fn from_symbols_rejects_unpaired_layouts() {
        assert_eq!(Deck::from_symbols([DOG, CAT, DOG]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols([DOG, DOG, DOG, DOG]), Err(GameError::InvalidDeck));
        assert_eq!(Deck::from_symbols([]), Err(GameError::InvalidDeck));
    }

    #[test]
    fn from_symbols_rejects_counts_that_would_wrap_a_byte() {
        let many = core::iter::repeat_n(DOG, 258);
        assert_eq!(Deck::from_symbols(many), Err(GameError::InvalidDeck));
    }
}
