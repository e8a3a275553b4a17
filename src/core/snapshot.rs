use super::{
    deck::DeckStore,
    models::Card,
};
use crate::persistence::StarStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoDeck,
    NoStarredMatches,
}

impl EmptyReason {
    pub fn title(&self) -> &'static str {
        "No cards to display"
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyReason::NoDeck => "Upload or paste JSON data above to get started.",
            EmptyReason::NoStarredMatches => {
                "No matching starred cards. Uncheck filter or star some."
            }
        }
    }
}

/// Read-only view of a `DeckStore` for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSnapshot {
    pub card: Option<Card>,
    pub starred: bool,
    pub position: usize, // 1-based, 0 when empty
    pub displayed: usize,
    pub total: usize,
    pub show_starred_only: bool,
    pub can_prev: bool,
    pub can_next: bool,
    pub can_shuffle: bool,
    pub empty_reason: Option<EmptyReason>,
}

impl DeckSnapshot {
    pub fn from_store<S: StarStorage>(store: &DeckStore<S>) -> Self {
        let displayed = store.displayed_len();
        let index = store.current_index();
        let card = store.current_card().cloned();
        let starred = card.as_ref().is_some_and(|card| store.is_starred(&card.id));

        let empty_reason = match (displayed, store.deck_len()) {
            (0, 0) => Some(EmptyReason::NoDeck),
            (0, _) => Some(EmptyReason::NoStarredMatches),
            _ => None,
        };

        Self {
            card,
            starred,
            position: if displayed > 0 { index + 1 } else { 0 },
            displayed,
            total: store.deck_len(),
            show_starred_only: store.show_starred_only(),
            can_prev: displayed > 1 && index > 0,
            can_next: displayed > 1 && index < displayed - 1,
            can_shuffle: displayed > 1,
            empty_reason,
        }
    }

    pub fn can_star(&self) -> bool {
        self.card.is_some()
    }

    pub fn counter_text(&self) -> String {
        if self.show_starred_only {
            format!("{} / {} (of {} total)", self.position, self.displayed, self.total)
        } else {
            format!("{} / {}", self.position, self.displayed)
        }
    }
}
