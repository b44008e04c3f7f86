#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use card::*;
pub use controller::*;
pub use deck::*;
pub use error::*;
pub use level::*;
pub use snapshot::*;
pub use sound::*;
pub use symbols::*;
pub use types::*;

mod card;
mod controller;
mod deck;
mod error;
mod level;
mod snapshot;
mod sound;
mod symbols;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    Revealed,
    Matched,
    Mismatched,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// A pair is face up; the caller owes a [`GameController::resolve_reveal`] after [`REVEAL_DELAY_MS`].
    pub const fn needs_resolution(self) -> bool {
        matches!(self, Self::Matched | Self::Mismatched)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    NoChange,
    Cleared,
    Won,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        use ResolveOutcome::*;
        match self {
            NoChange => false,
            Cleared => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Counted,
    TimeUp,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextLevel(usize),
    AllLevelsComplete,
}
