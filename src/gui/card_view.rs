use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::core::DeckSnapshot;

/// Which side of the card is showing. Presentation state only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardFace {
    flipped: bool,
}

impl CardFace {
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Flips only when there is a card to flip.
    pub fn flip(&mut self, has_card: bool) {
        if has_card {
            self.flipped = !self.flipped;
        }
    }

    pub fn reset(&mut self) {
        self.flipped = false;
    }
}

pub fn card_view(
    ui: &mut egui::Ui,
    snapshot: &DeckSnapshot,
    face: CardFace,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    let ctx = ui.ctx().clone();
    let size = egui::vec2(ui.available_width().min(560.0), 300.0);

    let (heading, body, fill) = match (&snapshot.card, snapshot.empty_reason) {
        (Some(card), _) if face.is_flipped() => {
            ("Definition", card.definition.as_str(), theme.card_back_fill(&ctx))
        }
        (Some(card), _) => ("Term", card.title.as_str(), theme.card_fill(&ctx)),
        (None, Some(reason)) => (reason.title(), reason.hint(), theme.card_fill(&ctx)),
        (None, None) => ("", "", theme.card_fill(&ctx)),
    };

    ui.vertical_centered(|ui| {
        ui.allocate_ui(egui::vec2(size.x, 28.0), |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(heading).small().color(theme.muted(&ctx)));
                if snapshot.can_star() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        star_button(ui, snapshot.starred, theme, actions);
                    });
                }
            });
        });

        let frame = egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(20))
            .stroke(egui::Stroke::new(1.0, theme.muted(&ctx)));

        let response = frame
            .show(ui, |ui| {
                ui.set_min_size(size);
                ui.set_max_width(size.x);

                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    let text = egui::RichText::new(body).size(if face.is_flipped() { 20.0 } else { 28.0 });
                    let text = if snapshot.card.is_some() {
                        text
                    } else {
                        text.color(theme.muted(&ctx))
                    };
                    ui.add(egui::Label::new(text).wrap().selectable(false));
                });
            })
            .response;

        if snapshot.card.is_some() {
            let response =
                response.interact(egui::Sense::click()).on_hover_text("Click or press Space to flip");
            if response.clicked() {
                actions.push(UiAction::Flip);
            }
        }
    });
}

fn star_button(ui: &mut egui::Ui, starred: bool, theme: &Theme, actions: &mut ActionQueue) {
    let (icon, color, hint) = if starred {
        ("★", theme.star(ui.ctx()), "Unstar (S)")
    } else {
        ("☆", theme.muted(ui.ctx()), "Star (S)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(color)).frame(false);
    if ui.add(button).on_hover_text(hint).clicked() {
        actions.push(UiAction::ToggleStar);
    }
}
