use std::path::PathBuf;

use eframe::egui;

use crate::core::{
    Direction,
    LoadOrigin,
};

// A simple ui action queue so widgets don't need mutable access to the deck
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Deck
    Navigate(Direction),
    Shuffle,
    ToggleStar,
    SetFilter(bool),

    // Presentation only
    Flip,

    // Loading
    BrowseForDeck,
    OpenDeckFile { path: PathBuf, origin: LoadOrigin },
    LoadPasted(String),
    ClearRecentDecks,

    // Settings
    OpenSettings,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub fn action_for_key(key: egui::Key) -> Option<UiAction> {
    match key {
        egui::Key::ArrowRight => Some(UiAction::Navigate(Direction::Next)),
        egui::Key::ArrowLeft => Some(UiAction::Navigate(Direction::Prev)),
        egui::Key::Space => Some(UiAction::Flip),
        egui::Key::S => Some(UiAction::ToggleStar),
        _ => None,
    }
}

/// Ctrl/Alt/Cmd chords belong to the platform. Shift is allowed so `S` and
/// `s` both star.
fn blocks_shortcuts(modifiers: &egui::Modifiers) -> bool {
    modifiers.ctrl || modifiers.alt || modifiers.command || modifiers.mac_cmd
}

/// Queues shortcut actions for keys pressed this frame.
///
/// Skipped entirely while a text field has focus so typing into the paste
/// box never flips or stars cards.
pub fn collect_keyboard_actions(ctx: &egui::Context, queue: &mut ActionQueue) {
    if ctx.wants_keyboard_input() {
        return;
    }

    ctx.input(|input| {
        for event in &input.events {
            if let egui::Event::Key { key, pressed: true, repeat: false, modifiers, .. } = event {
                if blocks_shortcuts(modifiers) {
                    continue;
                }
                if let Some(action) = action_for_key(*key) {
                    queue.push(action);
                }
            }
        }
    });
}
