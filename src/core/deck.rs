use std::collections::BTreeSet;

use rand::{
    seq::SliceRandom,
    Rng,
};

use super::{
    models::{
        parse_deck,
        Card,
        DeckState,
        Direction,
    },
    snapshot::DeckSnapshot,
    FlashdeckError,
};
use crate::persistence::StarStorage;

/// Deck state machine.
///
/// Owns the loaded deck, the displayed subset (positions into the deck, so
/// reordering it never touches deck order), the current index, the starred
/// ids and the starred-only filter flag. Every public method leaves the
/// store consistent: `current_index < displayed_len()` whenever the view is
/// non-empty.
pub struct DeckStore<S: StarStorage> {
    deck: Vec<Card>,
    displayed: Vec<usize>,
    current_index: usize,
    starred: BTreeSet<String>,
    show_starred_only: bool,
    has_loaded: bool,
    storage: S,
}

impl<S: StarStorage> DeckStore<S> {
    pub fn new(storage: S) -> Self {
        let starred = storage.load_starred();

        Self {
            deck: Vec::new(),
            displayed: Vec::new(),
            current_index: 0,
            starred,
            show_starred_only: false,
            has_loaded: false,
            storage,
        }
    }

    /// Replaces the deck with `payload`. On error nothing changes.
    pub fn load(&mut self, payload: &str) -> Result<usize, FlashdeckError> {
        let cards = parse_deck(payload)?;
        let size = cards.len();

        self.deck = cards;
        self.has_loaded = true;
        self.refresh_view();

        tracing::info!("Loaded deck with {} cards", size);
        Ok(size)
    }

    /// Loads the default dataset, unless a load has already succeeded.
    ///
    /// Returns `Ok(None)` when skipped. The payload is not parsed in that case.
    pub fn load_default(&mut self, payload: &str) -> Result<Option<usize>, FlashdeckError> {
        if self.has_loaded {
            tracing::debug!("Skipping default deck: a deck is already loaded");
            return Ok(None);
        }

        self.load(payload).map(Some)
    }

    pub fn set_filter(&mut self, show_starred_only: bool) {
        self.show_starred_only = show_starred_only;
        self.refresh_view();

        if show_starred_only && self.displayed.is_empty() && !self.deck.is_empty() {
            tracing::info!("Starred-only filter matches no cards");
        }
    }

    /// Moves one card forward or back. Returns whether the position changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Next if self.current_index + 1 < self.displayed.len() => {
                self.current_index += 1;
                true
            }
            Direction::Prev if self.current_index > 0 => {
                self.current_index -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::rng())
    }

    /// Uniformly permutes the displayed view and returns to its first card.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.displayed.len() <= 1 {
            return false;
        }

        self.displayed.shuffle(rng);
        self.current_index = 0;
        true
    }

    /// Flips the star on the current card and persists the new set.
    ///
    /// Returns the card's new starred state, or `None` when no card is shown.
    /// A failed write leaves the starred set as it was.
    pub fn toggle_star(&mut self) -> Result<Option<bool>, FlashdeckError> {
        let Some(id) = self.current_card().map(|card| card.id.clone()) else {
            return Ok(None);
        };

        let now_starred = !self.starred.contains(&id);
        let mut updated = self.starred.clone();
        if now_starred {
            updated.insert(id.clone());
        } else {
            updated.remove(&id);
        }

        self.storage.save_starred(&updated)?;
        self.starred = updated;
        tracing::debug!("Card {} starred: {}", id, now_starred);

        if self.show_starred_only && !now_starred {
            self.refresh_view();
        }

        Ok(Some(now_starred))
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.displayed.get(self.current_index).map(|&position| &self.deck[position])
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.starred.contains(id)
    }

    pub fn current_index(&self) -> usize {
        if self.displayed.is_empty() {
            0
        } else {
            self.current_index
        }
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn displayed(&self) -> impl Iterator<Item = &Card> + '_ {
        self.displayed.iter().map(|&position| &self.deck[position])
    }

    pub fn starred_ids(&self) -> &BTreeSet<String> {
        &self.starred
    }

    pub fn show_starred_only(&self) -> bool {
        self.show_starred_only
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn state(&self) -> DeckState {
        if self.displayed.is_empty() {
            DeckState::Empty
        } else {
            DeckState::Viewing
        }
    }

    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot::from_store(self)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn refresh_view(&mut self) {
        self.displayed = if self.show_starred_only {
            self.deck
                .iter()
                .enumerate()
                .filter(|(_, card)| self.starred.contains(&card.id))
                .map(|(position, _)| position)
                .collect()
        } else {
            (0..self.deck.len()).collect()
        };
        self.current_index = 0;
    }
}
