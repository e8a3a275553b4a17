use std::{
    mem,
    path::{
        Path,
        PathBuf,
    },
};

use eframe::egui::{
    self,
    Id,
};

use super::{
    actions::{
        collect_keyboard_actions,
        ActionQueue,
        UiAction,
    },
    card_view::{
        card_view,
        CardFace,
    },
    controls::deck_controls,
    deck_loader::{
        browse_for_deck,
        DeckLoader,
    },
    notifications::{
        Notice,
        NotificationArea,
    },
    recent_decks::{
        RecentDecks,
        RECENT_DECKS_FILE,
    },
    settings::{
        SettingsData,
        SettingsModal,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        source::{
            is_deck_file,
            prepare_pasted,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        DeckStore,
        FlashdeckError,
        LoadOrigin,
    },
    persistence::{
        load_json_or_default,
        save_json,
        JsonStarStorage,
    },
};

pub struct FlashdeckApp {
    // Deck
    store: DeckStore<JsonStarStorage>,

    // Configuration
    settings: SettingsData,
    recent_decks: RecentDecks,

    // UI State
    theme: Theme,
    face: CardFace,
    notices: NotificationArea,
    deck_loader: DeckLoader,
    settings_modal: SettingsModal,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl FlashdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let recent_decks = load_json_or_default::<RecentDecks>(RECENT_DECKS_FILE);

        let storage = JsonStarStorage::in_app_data_dir();
        tracing::info!("Starred cards stored at {}", storage.file_path().display());
        let store = DeckStore::new(storage);

        let task_manager = TaskManager::new();
        task_manager.load_default_deck(settings.default_deck.clone());

        let app = Self {
            store,
            notices: NotificationArea::new(settings.notice_timeout()),
            settings,
            recent_decks,
            theme: Theme::dracula(),
            face: CardFace::default(),
            deck_loader: DeckLoader::new(),
            settings_modal: SettingsModal::new(),
            actions: ActionQueue::new(),
            task_manager,
        };

        app.setup_theme(cc);
        app
    }

    fn setup_theme(&self, cc: &eframe::CreationContext<'_>) {
        cc.egui_ctx.set_zoom_factor(self.settings.zoom_factor);
        set_theme(&cc.egui_ctx, &self.theme);
        cc.egui_ctx.set_theme(if self.settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
    }
}

impl eframe::App for FlashdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.handle_file_drops(ctx);
        collect_keyboard_actions(ctx, &mut self.actions);

        TopBar::show(
            ctx,
            &self.recent_decks,
            self.store.deck_len(),
            self.store.starred_ids().len(),
            &mut self.actions,
        );

        let snapshot = self.store.snapshot();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.deck_loader.show(ui, &mut self.actions);
                ui.add_space(16.0);
                card_view(ui, &snapshot, self.face, &self.theme, &mut self.actions);
                ui.add_space(12.0);
                deck_controls(ui, &snapshot, &self.theme, &mut self.actions);
            });
        });

        self.draw_file_drop_overlay(ctx);
        self.notices.show(ctx, &self.theme);

        if let Some(settings) = self.settings_modal.show(ctx, &self.theme) {
            self.settings = settings;
            self.notices.set_timeout(self.settings.notice_timeout());
            self.save_settings();
        }

        let pending: Vec<UiAction> = self.actions.drain().collect();
        for action in pending {
            self.apply_action(action);
        }
        if !self.actions.is_empty() {
            ctx.request_repaint();
        }

        self.sync_dark_mode(ctx);

        // Worker threads don't wake the UI; poll while anything may be in flight.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

impl FlashdeckApp {
    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::Navigate(direction) => {
                if self.store.navigate(direction) {
                    self.face.reset();
                }
            }
            UiAction::Shuffle => {
                if self.store.shuffle() {
                    self.face.reset();
                }
            }
            UiAction::SetFilter(show_starred_only) => {
                self.store.set_filter(show_starred_only);
                self.face.reset();
            }
            UiAction::ToggleStar => self.toggle_star(),
            UiAction::Flip => self.face.flip(self.store.current_card().is_some()),
            UiAction::BrowseForDeck => {
                if let Some(action) = browse_for_deck() {
                    self.apply_action(action);
                }
            }
            UiAction::OpenDeckFile { path, origin } => {
                tracing::info!("Reading deck file: {}", path.display());
                self.task_manager.read_deck_file(path, origin);
            }
            UiAction::LoadPasted(text) => match prepare_pasted(&text) {
                Some(payload) => {
                    if self.load_deck(payload, LoadOrigin::Paste).is_ok() {
                        self.task_manager.supersede_reads();
                        self.deck_loader.clear_paste();
                    }
                }
                None => self.notices.push(Notice::info("Textarea is empty. Paste your JSON data first.")),
            },
            UiAction::ClearRecentDecks => {
                self.recent_decks.clear();
                self.save_recent_decks();
            }
            UiAction::OpenSettings => self.settings_modal.open_settings(self.settings.clone()),
        }
    }

    fn toggle_star(&mut self) {
        let before = self.store.current_card().map(|card| card.id.clone());

        match self.store.toggle_star() {
            Ok(_) => {
                let after = self.store.current_card().map(|card| card.id.clone());
                if before != after {
                    self.face.reset();
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.notices.push(Notice::error(e.to_string()));
            }
        }
    }

    fn load_deck(&mut self, payload: &str, origin: LoadOrigin) -> Result<usize, FlashdeckError> {
        let result = self.store.load(payload);
        if result.is_ok() {
            self.face.reset();
        }
        self.notices.push(Notice::for_load(origin, &result));
        result
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        tracing::debug!("Task finished: {}", result.task_type());

        match result {
            TaskResult::DefaultDeck(Ok(payload)) => match self.store.load_default(&payload) {
                Ok(Some(size)) => {
                    self.face.reset();
                    self.notices.push(Notice::for_load(LoadOrigin::Default, &Ok(size)));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Default deck is invalid: {}", e);
                    if !self.store.has_loaded() {
                        self.notices.push(Notice::for_load(LoadOrigin::Default, &Err(e)));
                    }
                }
            },
            TaskResult::DefaultDeck(Err(e)) => {
                tracing::warn!("Default deck not loaded: {}", e);
                if !self.store.has_loaded() {
                    self.notices.push(Notice::default_unavailable());
                }
            }
            TaskResult::DeckFile { path, origin, result: Ok(payload), .. } => {
                if let Ok(size) = self.load_deck(&payload, origin) {
                    self.remember_deck(&path, size);
                }
            }
            TaskResult::DeckFile { path, origin, result: Err(e), .. } => {
                tracing::error!("{}", e);
                self.recent_decks.remove_deck(&path.display().to_string());
                self.notices.push(Notice::for_load(origin, &Err(e)));
            }
        }
    }

    fn remember_deck(&mut self, path: &Path, size: usize) {
        let file_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.recent_decks.add_deck(file_path.display().to_string(), size);
        self.save_recent_decks();
    }

    fn save_recent_decks(&self) {
        if let Err(e) = save_json(&self.recent_decks, RECENT_DECKS_FILE) {
            tracing::error!("Failed to save recent decks: {}", e);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            tracing::error!("Failed to save settings: {}", e);
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.save_settings();
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input_mut(|i| mem::take(&mut i.raw.dropped_files));
        if dropped.is_empty() {
            return;
        }

        let deck_path: Option<PathBuf> =
            dropped.iter().filter_map(|f| f.path.clone()).find(|p| is_deck_file(p));

        match deck_path {
            Some(path) => {
                self.actions.push(UiAction::OpenDeckFile { path, origin: LoadOrigin::DroppedFile })
            }
            None => self.notices.push(Notice::error("Only .json deck files can be dropped here.")),
        }
    }

    fn draw_file_drop_overlay(&self, ctx: &egui::Context) {
        let any_valid_hovered = ctx.input(|i| {
            i.raw.hovered_files.iter().filter_map(|f| f.path.as_deref()).any(is_deck_file)
        });
        if !any_valid_hovered {
            return;
        }

        let size = egui::vec2(300.0, 120.0);

        egui::Modal::new(Id::new("file_drop_overlay")).show(ctx, |ui| {
            ui.set_max_size(size);
            ui.set_min_size(size);

            ui.centered_and_justified(|ui| {
                ui.heading("📥  Drop to load deck");
            });
        });
    }
}
