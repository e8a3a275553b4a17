use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use super::actions::{
    ActionQueue,
    UiAction,
};
use crate::core::LoadOrigin;

/// Upload / paste panel shown above the card.
pub struct DeckLoader {
    pub expanded: bool,
    paste_buffer: String,
}

impl DeckLoader {
    pub fn new() -> Self {
        Self { expanded: true, paste_buffer: String::new() }
    }

    /// Called after a pasted deck loads successfully.
    pub fn clear_paste(&mut self) {
        self.paste_buffer.clear();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, actions: &mut ActionQueue) {
        let response = egui::CollapsingHeader::new("Load flashcards")
            .open(Some(self.expanded))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("📂 Browse for JSON file…").clicked() {
                        actions.push(UiAction::BrowseForDeck);
                    }
                    ui.label("or drop a .json file onto the window");
                });

                ui.add_space(6.0);
                ui.add(
                    egui::TextEdit::multiline(&mut self.paste_buffer)
                        .hint_text(r#"[{"id":"1","title":"Term","definition":"Meaning"}]"#)
                        .code_editor()
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );

                if ui.button("Load pasted JSON").clicked() {
                    actions.push(UiAction::LoadPasted(self.paste_buffer.clone()));
                }
            });

        if response.header_response.clicked() {
            self.expanded = !self.expanded;
        }
    }
}

impl Default for DeckLoader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn browse_for_deck() -> Option<UiAction> {
    FileDialog::new()
        .add_filter("JSON files", &["json"])
        .pick_file()
        .map(|path: PathBuf| UiAction::OpenDeckFile { path, origin: LoadOrigin::Upload })
}
