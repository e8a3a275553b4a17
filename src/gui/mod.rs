pub mod actions;
pub mod app;
pub mod card_view;
pub mod controls;
pub mod deck_loader;
pub mod notifications;
pub mod recent_decks;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::FlashdeckApp;
