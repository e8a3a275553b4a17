use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    recent_decks::{
        RecentDeckEntry,
        RecentDecks,
    },
};
use crate::core::LoadOrigin;

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        recent_decks: &RecentDecks,
        deck_len: usize,
        starred_len: usize,
        actions: &mut ActionQueue,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Open Deck…").clicked() {
                        actions.push(UiAction::BrowseForDeck);
                    }

                    ui.menu_button("Recent Decks", |ui| {
                        Self::recent_decks_menu(ui, recent_decks, actions);
                    });

                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                if ui.button("Settings").clicked() {
                    actions.push(UiAction::OpenSettings);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{} cards · {} starred", deck_len, starred_len));
                });
            });
        });
    }

    fn recent_decks_menu(ui: &mut egui::Ui, recent_decks: &RecentDecks, actions: &mut ActionQueue) {
        let decks = recent_decks.get_valid_decks();
        if decks.is_empty() {
            ui.label("No recent decks");
        } else {
            for entry in decks {
                Self::recent_deck_button(ui, entry, actions);
            }
        }

        ui.separator();
        if ui.add_enabled(!recent_decks.is_empty(), egui::Button::new("Clear recent decks")).clicked() {
            actions.push(UiAction::ClearRecentDecks);
            ui.close();
        }
    }

    fn recent_deck_button(ui: &mut egui::Ui, entry: &RecentDeckEntry, actions: &mut ActionQueue) {
        let label = format!("{} ({})", entry.get_filename(), entry.format_card_count());
        if ui.button(label).on_hover_text(format!("Last opened {}", entry.format_last_opened())).clicked() {
            actions.push(UiAction::OpenDeckFile {
                path: PathBuf::from(&entry.file_path),
                origin: LoadOrigin::Upload,
            });
            ui.close();
        }
    }
}
