use serde::{Deserialize, Serialize};

/// Index of a card within a deck, starting at 0.
pub type Position = usize;

/// Number of distinct symbols dealt for a level; the deck holds twice as many cards.
pub type PairCount = u16;

/// Whole seconds, used for level budgets and the countdown.
pub type Seconds = u32;

/// Delay before a pair of face-up cards is turned back (or settled when matched).
pub const REVEAL_DELAY_MS: u32 = 800;

/// Period of the countdown.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Identifies one level attempt.
///
/// Bumped every time a level is (re)started. Scheduled callbacks carry the
/// generation they were issued for so the controller can drop the ones that
/// outlived their level.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

pub(crate) const fn card_count(pairs: PairCount) -> usize {
    (pairs as usize).saturating_mul(2)
}
