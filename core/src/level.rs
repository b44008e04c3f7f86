use alloc::vec::Vec;

use serde::Serialize;

use crate::*;

/// One difficulty tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelDef {
    pub id: &'static str,
    pub label: &'static str,
    pub pair_count: PairCount,
    /// Countdown length; 0 means the level is untimed.
    pub time_budget_secs: Seconds,
}

impl LevelDef {
    pub const fn new(
        id: &'static str,
        label: &'static str,
        pair_count: PairCount,
        time_budget_secs: Seconds,
    ) -> Self {
        Self {
            id,
            label,
            pair_count,
            time_budget_secs,
        }
    }

    pub const fn is_timed(&self) -> bool {
        self.time_budget_secs > 0
    }

    pub const fn card_count(&self) -> usize {
        crate::types::card_count(self.pair_count)
    }
}

pub const STANDARD_LEVELS: &[LevelDef] = &[
    LevelDef::new("easy", "🐣 Easy", 3, 30),
    LevelDef::new("medium", "⚡ Medium", 6, 60),
    LevelDef::new("hard", "🔥 Hard", 10, 100),
    LevelDef::new("veryhard", "💀 Very Hard", 12, 120),
    LevelDef::new("extreme", "👑 Extreme", 14, 150),
];

/// Ordered levels plus the symbol pool they draw from.
///
/// Construction checks that every level can actually be dealt, so a catalog
/// that exists never asks the deck builder for more symbols than it has.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<LevelDef>,
    pool: SymbolPool,
}

impl LevelCatalog {
    pub fn new(levels: impl IntoIterator<Item = LevelDef>, pool: SymbolPool) -> Result<Self, ConfigError> {
        let levels: Vec<_> = levels.into_iter().collect();
        if levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        pool.validate()?;

        for (i, level) in levels.iter().enumerate() {
            if level.pair_count == 0 {
                return Err(ConfigError::NoPairs { id: level.id });
            }
            if usize::from(level.pair_count) > pool.len() {
                return Err(ConfigError::TooManyPairs {
                    id: level.id,
                    pairs: level.pair_count,
                    available: pool.len(),
                });
            }
            if levels[..i].iter().any(|other| other.id == level.id) {
                return Err(ConfigError::DuplicateLevel(level.id));
            }
        }

        log::debug!(
            "level catalog: {} levels over {} symbols",
            levels.len(),
            pool.len()
        );
        Ok(Self { levels, pool })
    }

    /// The five tiers of the classic game over the standard emoji pool.
    pub fn standard() -> Self {
        Self {
            levels: STANDARD_LEVELS.to_vec(),
            pool: SymbolPool::standard(),
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    pub fn validate_index(&self, index: usize) -> Result<usize, GameError> {
        if index < self.levels.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidLevel(index))
        }
    }

    pub fn has_next(&self, index: usize) -> bool {
        index.saturating_add(1) < self.levels.len()
    }

    pub fn pool(&self) -> &SymbolPool {
        &self.pool
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_validation() {
        let catalog = LevelCatalog::new(STANDARD_LEVELS.iter().copied(), SymbolPool::standard())
            .unwrap();
        assert_eq!(catalog, LevelCatalog::standard());
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).map(|level| level.id), Some("easy"));
        assert!(catalog.has_next(3));
        assert!(!catalog.has_next(4));
    }

    #[test]
    fn level_needing_more_symbols_than_the_pool_is_fatal() {
        static POOL: &[Symbol] = &[Symbol::new("a"), Symbol::new("b")];
        let pool = SymbolPool::new(POOL).unwrap();

        let err = LevelCatalog::new([LevelDef::new("big", "Big", 3, 10)], pool).unwrap_err();

        assert_eq!(
            err,
            ConfigError::TooManyPairs {
                id: "big",
                pairs: 3,
                available: 2
            }
        );
    }

    #[test]
    fn zero_pairs_empty_catalog_and_duplicate_ids_are_rejected() {
        let pool = SymbolPool::standard();
        assert_eq!(
            LevelCatalog::new([LevelDef::new("none", "None", 0, 10)], pool),
            Err(ConfigError::NoPairs { id: "none" })
        );
        assert_eq!(LevelCatalog::new([], pool), Err(ConfigError::NoLevels));
        assert_eq!(
            LevelCatalog::new(
                [
                    LevelDef::new("a", "A", 2, 10),
                    LevelDef::new("a", "Again", 3, 10)
                ],
                pool
            ),
            Err(ConfigError::DuplicateLevel("a"))
        );
    }

    #[test]
    fn pool_with_a_repeated_symbol_is_rejected() {
        static POOL: &[Symbol] = &[Symbol::new("a"), Symbol::new("a")];
        let pool = SymbolPool::new_unchecked(POOL);

        assert_eq!(
            LevelCatalog::new([LevelDef::new("l", "L", 2, 10)], pool),
            Err(ConfigError::DuplicateSymbol("a"))
        );
    }

    #[test]
    fn zero_budget_marks_an_untimed_level() {
        assert!(!LevelDef::new("zen", "Zen", 4, 0).is_timed());
        assert!(STANDARD_LEVELS.iter().all(LevelDef::is_timed));
        assert_eq!(STANDARD_LEVELS[4].card_count(), 28);
    }

    #[test]
    fn validate_index_reports_out_of_range() {
        let catalog = LevelCatalog::standard();
        assert_eq!(catalog.validate_index(4), Ok(4));
        assert_eq!(catalog.validate_index(5), Err(GameError::InvalidLevel(5)));
    }
}
