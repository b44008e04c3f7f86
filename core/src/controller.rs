use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
    AllLevelsComplete,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        !self.is_playing()
    }
}

/// The game: level progression, the board of the current level attempt and the countdown.
///
/// Every transition is synchronous. Delayed work (turning a pair back after
/// [`REVEAL_DELAY_MS`], counting down every [`TICK_INTERVAL_MS`]) is scheduled
/// by the caller, which passes back the [`Generation`] the work was scheduled
/// under; work from an earlier level attempt is ignored.
#[derive(Clone, Debug)]
pub struct GameController<S = Silent> {
    catalog: LevelCatalog,
    sounds: CuePlayer<S>,
    rng: SmallRng,
    level_index: usize,
    deck: Deck,
    revealed: SmallVec<[Position; 2]>,
    matched: Vec<bool>,
    matched_count: Saturating<usize>,
    time_remaining: Seconds,
    phase: Phase,
    has_interacted: bool,
    generation: Generation,
}

impl<S: SoundGateway> GameController<S> {
    /// Starts the first level of `catalog` with a deck shuffled from `seed`.
    pub fn new(catalog: LevelCatalog, sounds: S, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pair_count = catalog.levels()[0].pair_count;
        let deck = ShuffledDeck::new(rng.random()).generate(pair_count, catalog.pool());
        Self::assemble(catalog, sounds, rng, 0, deck)
    }

    /// Starts level `level_index` with a predetermined arrangement.
    ///
    /// Later (re)starts shuffle as usual.
    pub fn with_deck(
        catalog: LevelCatalog,
        sounds: S,
        level_index: usize,
        deck: Deck,
        seed: u64,
    ) -> Result<Self> {
        let level_index = catalog.validate_index(level_index)?;
        if catalog.get(level_index).map(LevelDef::card_count) != Some(deck.len()) {
            return Err(GameError::InvalidDeck);
        }
        let rng = SmallRng::seed_from_u64(seed);
        Ok(Self::assemble(catalog, sounds, rng, level_index, deck))
    }

    fn assemble(
        catalog: LevelCatalog,
        sounds: S,
        rng: SmallRng,
        level_index: usize,
        deck: Deck,
    ) -> Self {
        let mut controller = Self {
            catalog,
            sounds: CuePlayer::new(sounds),
            rng,
            level_index,
            deck: Deck::from_arranged(Vec::new()),
            revealed: SmallVec::new(),
            matched: Vec::new(),
            matched_count: Saturating(0),
            time_remaining: 0,
            phase: Phase::Playing,
            has_interacted: false,
            generation: Generation::default(),
        };
        controller.reset_level(level_index, deck);
        controller
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level(&self) -> &LevelDef {
        &self.catalog.levels()[self.level_index]
    }

    pub fn has_next_level(&self) -> bool {
        self.catalog.has_next(self.level_index)
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn revealed(&self) -> &[Position] {
        &self.revealed
    }

    pub fn is_matched(&self, position: Position) -> bool {
        self.matched.get(position).copied().unwrap_or(false)
    }

    pub fn matched_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.matched
            .iter()
            .enumerate()
            .filter_map(|(position, &matched)| matched.then_some(position))
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_count.0 / 2
    }

    pub fn is_board_cleared(&self) -> bool {
        !self.deck.is_empty() && self.matched_count.0 == self.deck.len()
    }

    pub fn time_remaining(&self) -> Seconds {
        self.time_remaining
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the countdown should currently be ticking.
    pub fn timer_running(&self) -> bool {
        self.phase.is_playing()
            && self.has_interacted
            && self.level().is_timed()
            && self.time_remaining > 0
    }

    /// Whether two cards are face up and waiting for [`Self::resolve_reveal`].
    pub fn is_resolving(&self) -> bool {
        self.revealed.len() == 2
    }

    /// What the player sees at `position`, or `None` outside the deck.
    pub fn face_at(&self, position: Position) -> Option<CardFace> {
        let card = self.deck.cards().get(position)?;
        Some(self.face_of(card))
    }

    /// Faces of the whole board, in position order.
    pub fn faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        self.deck.cards().iter().map(|card| self.face_of(card))
    }

    pub fn sounds(&self) -> &CuePlayer<S> {
        &self.sounds
    }

    /// Records that the player interacted with the page. Unlocks audio and the countdown.
    pub fn register_interaction(&mut self) {
        if !self.has_interacted {
            log::debug!("first interaction");
            self.has_interacted = true;
        }
        self.sounds.unlock();
    }

    pub fn start_level(&mut self, index: usize) -> Result<()> {
        let index = self.catalog.validate_index(index)?;
        self.deal_level(index);
        Ok(())
    }

    pub fn restart(&mut self) {
        self.deal_level(0);
    }

    pub fn retry(&mut self) -> Result<()> {
        match self.phase {
            Phase::Lost | Phase::Won => {
                self.deal_level(self.level_index);
                Ok(())
            }
            _ => Err(GameError::InvalidTransition),
        }
    }

    pub fn advance_level(&mut self) -> Result<AdvanceOutcome> {
        if self.phase != Phase::Won {
            log::warn!("advance requested while {:?}", self.phase);
            return Err(GameError::InvalidTransition);
        }

        if self.has_next_level() {
            let next = self.level_index + 1;
            self.deal_level(next);
            Ok(AdvanceOutcome::NextLevel(next))
        } else {
            log::debug!("all {} levels complete", self.catalog.len());
            self.phase = Phase::AllLevelsComplete;
            Ok(AdvanceOutcome::AllLevelsComplete)
        }
    }

    /// Turns the card at `position` face up.
    ///
    /// Counts as the player's interaction even when the flip itself is
    /// ignored. When this is the second card, symbols are compared right away
    /// and a match is recorded; the pair stays in [`Self::revealed`] until
    /// [`Self::resolve_reveal`] is called with the current generation.
    pub fn flip(&mut self, position: Position) -> Result<FlipOutcome> {
        self.register_interaction();
        let position = self.deck.validate_position(position)?;
        self.check_playing()?;

        if self.revealed.len() >= 2 || self.revealed.contains(&position) || self.matched[position]
        {
            log::trace!("flip {} ignored", position);
            return Ok(FlipOutcome::Ignored);
        }

        self.revealed.push(position);
        self.sounds.play(Cue::Flip);
        log::trace!("flip {} shows {}", position, self.deck.symbol_at(position));

        if self.revealed.len() < 2 {
            return Ok(FlipOutcome::Revealed);
        }
        let (first, second) = (self.revealed[0], self.revealed[1]);

        if self.deck.symbol_at(first) == self.deck.symbol_at(second) {
            self.mark_matched(first);
            self.mark_matched(second);
            self.sounds.play(Cue::Match);
            log::debug!("matched {} and {}", first, second);
            Ok(FlipOutcome::Matched)
        } else {
            Ok(FlipOutcome::Mismatched)
        }
    }

    /// Turns the pending pair back down, then checks whether the board is cleared.
    pub fn resolve_reveal(&mut self, generation: Generation) -> ResolveOutcome {
        if generation != self.generation {
            log::trace!("stale reveal from {:?} ignored", generation);
            return ResolveOutcome::NoChange;
        }
        if !self.is_resolving() {
            return ResolveOutcome::NoChange;
        }

        self.revealed.clear();

        if self.phase.is_playing() && self.is_board_cleared() {
            log::debug!("level {} won", self.level().id);
            self.phase = Phase::Won;
            self.sounds.play(Cue::Win);
            ResolveOutcome::Won
        } else {
            ResolveOutcome::Cleared
        }
    }

    /// One second of the countdown.
    pub fn tick(&mut self, generation: Generation) -> TickOutcome {
        if generation != self.generation || !self.timer_running() {
            return TickOutcome::NoChange;
        }

        self.time_remaining -= 1;
        log::trace!("{}s left", self.time_remaining);

        if self.time_remaining == 0 {
            log::debug!("level {} lost on time", self.level().id);
            self.phase = Phase::Lost;
            self.sounds.play(Cue::Lose);
            TickOutcome::TimeUp
        } else {
            TickOutcome::Counted
        }
    }

    fn deal_level(&mut self, index: usize) {
        let pair_count = self.catalog.levels()[index].pair_count;
        let deck = ShuffledDeck::new(self.rng.random()).generate(pair_count, self.catalog.pool());
        self.reset_level(index, deck);
    }

    fn reset_level(&mut self, index: usize, deck: Deck) {
        let level = self.catalog.levels()[index];
        self.level_index = index;
        self.matched = vec![false; deck.len()];
        self.deck = deck;
        self.revealed.clear();
        self.matched_count = Saturating(0);
        self.time_remaining = level.time_budget_secs;
        self.phase = Phase::Playing;
        self.generation = self.generation.next();
        log::debug!(
            "level {} ({}) started: {} cards, {}s, {:?}",
            index,
            level.id,
            self.deck.len(),
            level.time_budget_secs,
            self.generation
        );
    }

    fn face_of(&self, card: &Card) -> CardFace {
        if self.matched[card.position] {
            CardFace::Matched(card.symbol)
        } else if self.revealed.contains(&card.position) {
            CardFace::Revealed(card.symbol)
        } else {
            CardFace::Hidden
        }
    }

    fn mark_matched(&mut self, position: Position) {
        if !self.matched[position] {
            self.matched[position] = true;
            self.matched_count += 1;
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.phase.is_playing() {
            Ok(())
        } else {
            Err(GameError::LevelOver)
        }
    }
}
