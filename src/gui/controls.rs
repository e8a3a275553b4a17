use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::{
    DeckSnapshot,
    Direction,
};

/// Navigation row under the card: prev / flip / next, shuffle, counter and
/// the starred-only filter.
pub fn deck_controls(
    ui: &mut egui::Ui,
    snapshot: &DeckSnapshot,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let total_width = 420.0;
            ui.add_space(((ui.available_width() - total_width) / 2.0).max(0.0));

            if ui
                .add_enabled(snapshot.can_prev, egui::Button::new("◀ Prev"))
                .on_hover_text("Previous card (←)")
                .clicked()
            {
                actions.push(UiAction::Navigate(Direction::Prev));
            }

            if ui
                .add_enabled(snapshot.card.is_some(), egui::Button::new("⟲ Flip"))
                .on_hover_text("Flip card (Space)")
                .clicked()
            {
                actions.push(UiAction::Flip);
            }

            if ui
                .add_enabled(snapshot.can_next, egui::Button::new("Next ▶"))
                .on_hover_text("Next card (→)")
                .clicked()
            {
                actions.push(UiAction::Navigate(Direction::Next));
            }

            ui.separator();

            if ui.add_enabled(snapshot.can_shuffle, egui::Button::new("🔀 Shuffle")).clicked() {
                actions.push(UiAction::Shuffle);
            }

            ui.separator();
            ui.label(egui::RichText::new(snapshot.counter_text()).color(theme.muted(ui.ctx())));
        });

        ui.add_space(6.0);

        let mut show_starred_only = snapshot.show_starred_only;
        if ui.checkbox(&mut show_starred_only, "Show only starred").changed() {
            actions.push(UiAction::SetFilter(show_starred_only));
        }
    });
}
