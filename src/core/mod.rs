pub mod deck;
pub mod errors;
pub mod http;
pub mod models;
pub mod snapshot;
pub mod source;
pub mod tasks;

#[cfg(test)]
mod deck_tests;

pub use deck::DeckStore;
pub use errors::FlashdeckError;
pub use models::{
    Card,
    DeckState,
    Direction,
    LoadOrigin,
};
pub use snapshot::{
    DeckSnapshot,
    EmptyReason,
};
