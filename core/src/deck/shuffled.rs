use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Deals the first `pair_count` symbols of the pool twice each, in a uniformly random order.
///
/// # Panics
///
/// When `pair_count` is zero or larger than the pool. Catalog validation rules
/// both out for every level, so reaching it is a programming error.
pub fn build_deck<R: Rng + ?Sized>(pair_count: PairCount, pool: &SymbolPool, rng: &mut R) -> Deck {
    let wanted = usize::from(pair_count);
    let chosen = match pool.take(wanted) {
        Some(chosen) if wanted > 0 => chosen,
        _ => panic!(
            "cannot deal {} pairs from a pool of {} symbols",
            pair_count,
            pool.len()
        ),
    };

    let mut symbols: Vec<Symbol> = chosen.iter().chain(chosen).copied().collect();
    // Fisher-Yates: every arrangement is equally likely
    symbols.shuffle(rng);

    Deck::from_arranged(symbols)
}

/// Seeded deck generation, reproducible for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeck {
    seed: u64,
}

impl ShuffledDeck {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeck {
    fn generate(self, pair_count: PairCount, pool: &SymbolPool) -> Deck {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let deck = build_deck(pair_count, pool, &mut rng);
        log::trace!("dealt {} cards from seed {:#x}", deck.len(), self.seed);
        deck
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(symbols: impl Iterator<Item = Symbol>) -> Vec<Symbol> {
        let mut symbols: Vec<_> = symbols.collect();
        symbols.sort();
        symbols
    }

    #[test]
    fn selection_is_the_head_of_the_pool() {
        let pool = SymbolPool::standard();
        let deck = ShuffledDeck::new(7).generate(3, &pool);

        let expected = sorted(STANDARD_SYMBOLS[..3].iter().chain(&STANDARD_SYMBOLS[..3]).copied());
        assert_eq!(sorted(deck.symbols()), expected);
    }

    #[test]
    fn same_seed_deals_the_same_arrangement() {
        let pool = SymbolPool::standard();
        assert_eq!(
            ShuffledDeck::new(42).generate(10, &pool),
            ShuffledDeck::new(42).generate(10, &pool)
        );
    }

    #[test]
    fn every_arrangement_of_a_small_deck_shows_up() {
        // 2 pairs give 4!/(2!*2!) = 6 distinct symbol orders
        let pool = SymbolPool::standard();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut seen = alloc::collections::BTreeSet::new();
        for _ in 0..600 {
            let deck = build_deck(2, &pool, &mut rng);
            seen.insert(deck.symbols().collect::<Vec<_>>());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    #[should_panic(expected = "cannot deal 49 pairs")]
    fn dealing_beyond_the_pool_fails_fast() {
        ShuffledDeck::new(0).generate(49, &SymbolPool::standard());
    }

    #[test]
    #[should_panic(expected = "cannot deal 0 pairs")]
    fn dealing_zero_pairs_fails_fast() {
        ShuffledDeck::new(0).generate(0, &SymbolPool::standard());
    }

    proptest! {
        #[test]
        fn deck_holds_each_chosen_symbol_twice(pairs in 1u16..=48, seed: u64) {
            let pool = SymbolPool::standard();
            let deck = ShuffledDeck::new(seed).generate(pairs, &pool);

            prop_assert_eq!(deck.len(), usize::from(pairs) * 2);
            for (i, card) in deck.cards().iter().enumerate() {
                prop_assert_eq!(card.position, i);
            }
            let chosen = pool.take(usize::from(pairs)).unwrap();
            for symbol in chosen {
                prop_assert_eq!(deck.symbols().filter(|s| s == symbol).count(), 2);
            }
            prop_assert!(Deck::from_symbols(deck.symbols()).is_ok());
        }

        #[test]
        fn shuffle_is_a_permutation(pairs in 1u16..=14, seed: u64) {
            let pool = SymbolPool::standard();
            let chosen = pool.take(usize::from(pairs)).unwrap();
            let before = sorted(chosen.iter().chain(chosen).copied());

            let deck = ShuffledDeck::new(seed).generate(pairs, &pool);

            prop_assert_eq!(sorted(deck.symbols()), before);
        }
    }
}
