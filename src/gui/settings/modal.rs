use std::path::PathBuf;

use eframe::egui;

use super::data::SettingsData;
use crate::{
    core::source::DefaultDeckSource,
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    File,
    Url,
}

pub struct SettingsModal {
    open: bool,
    original: SettingsData,
    draft: SettingsData,
    source_kind: SourceKind,
    path_input: String,
    url_input: String,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            original: SettingsData::default(),
            draft: SettingsData::default(),
            source_kind: SourceKind::File,
            path_input: String::new(),
            url_input: String::new(),
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.load_inputs(&current_settings);
        self.original = current_settings.clone();
        self.draft = current_settings;
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.label(theme.heading(ctx, "Settings").heading());
            ui.add_space(10.0);

            self.ui_default_deck(ui);
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Hide notices after");
                ui.add(egui::DragValue::new(&mut self.draft.notice_seconds).range(1..=60).suffix(" s"));
            });

            ui.add_space(10.0);
            ui.separator();

            let pending = self.pending_settings();
            let is_dirty = pending != self.original;

            ui.horizontal(|ui| {
                let save_clicked = ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    self.original = pending.clone();
                    result = Some(pending);
                    ui.close();
                } else if cancel_clicked {
                    ui.close();
                } else if reset_clicked {
                    let defaults = SettingsData {
                        dark_mode: self.draft.dark_mode,
                        zoom_factor: self.draft.zoom_factor,
                        ..SettingsData::default()
                    };
                    self.load_inputs(&defaults);
                    self.draft = defaults;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_default_deck(&mut self, ui: &mut egui::Ui) {
        ui.label("Default deck (loaded at startup when nothing else is loaded):");
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.source_kind, SourceKind::File, "File");
            ui.radio_value(&mut self.source_kind, SourceKind::Url, "URL");
        });

        match self.source_kind {
            SourceKind::File => {
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut self.path_input).desired_width(300.0));
                    if ui.button("Browse…").clicked() {
                        if let Some(path) =
                            rfd::FileDialog::new().add_filter("JSON files", &["json"]).pick_file()
                        {
                            self.path_input = path.display().to_string();
                        }
                    }
                });
            }
            SourceKind::Url => {
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_input)
                        .hint_text("https://example.com/flashcards.json")
                        .desired_width(f32::INFINITY),
                );
            }
        }

        ui.small("Takes effect on next launch.");
    }

    fn load_inputs(&mut self, settings: &SettingsData) {
        match &settings.default_deck {
            DefaultDeckSource::File(path) => {
                self.source_kind = SourceKind::File;
                self.path_input = path.display().to_string();
                self.url_input.clear();
            }
            DefaultDeckSource::Url(url) => {
                self.source_kind = SourceKind::Url;
                self.url_input = url.clone();
                self.path_input.clear();
            }
        }
    }

    fn pending_settings(&self) -> SettingsData {
        let default_deck = match self.source_kind {
            SourceKind::File if self.path_input.trim().is_empty() => DefaultDeckSource::default(),
            SourceKind::File => DefaultDeckSource::File(PathBuf::from(self.path_input.trim())),
            SourceKind::Url => DefaultDeckSource::Url(self.url_input.trim().to_string()),
        };

        SettingsData { default_deck, ..self.draft.clone() }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
