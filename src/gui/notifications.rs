use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::{
    core::{
        FlashdeckError,
        LoadOrigin,
    },
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }

    pub fn for_load(origin: LoadOrigin, result: &Result<usize, FlashdeckError>) -> Self {
        match result {
            Ok(_) if origin == LoadOrigin::Default => {
                Notice::info("Loaded default flashcards. You can upload your own above.")
            }
            Ok(0) => Notice::info("Loaded an empty set of flashcards. Add data to your JSON."),
            Ok(size) => Notice::success(format!("Successfully loaded {} flashcards!", size)),
            Err(_) if origin == LoadOrigin::Default => Notice::default_unavailable(),
            Err(FlashdeckError::ReadFailure { .. }) => Notice::error("Error reading file."),
            Err(e) if e.is_invalid_deck() => Notice::error(format!(
                "{}. Please check format and content.",
                e.to_string().trim_end_matches('.')
            )),
            Err(e) => Notice::error(e.to_string()),
        }
    }

    pub fn default_unavailable() -> Self {
        Notice::info("No default deck found. Upload or paste JSON to get started.")
    }
}

/// A single transient notice. A new notice replaces the current one and
/// restarts the timeout.
pub struct NotificationArea {
    current: Option<(Notice, Instant)>,
    timeout: Duration,
}

impl NotificationArea {
    pub fn new(timeout: Duration) -> Self {
        Self { current: None, timeout }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) {
        match notice.kind {
            NoticeKind::Error => tracing::warn!("{}", notice.text),
            _ => tracing::info!("{}", notice.text),
        }
        self.current = Some((notice, now));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    /// Drops the notice once it is older than the timeout.
    pub fn expire(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.current {
            if now.saturating_duration_since(*shown_at) >= self.timeout {
                self.current = None;
            }
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.expire(Instant::now());

        let Some((notice, shown_at)) = &self.current else {
            return;
        };

        let color = match notice.kind {
            NoticeKind::Success => theme.green(ctx),
            NoticeKind::Error => theme.red(ctx),
            NoticeKind::Info => theme.cyan(ctx),
        };

        let mut dismissed = false;
        egui::Area::new(egui::Id::new("notification_area"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -48.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).stroke(egui::Stroke::new(1.5, color)).show(ui, |ui| {
                    ui.set_max_width(520.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&notice.text).color(color));
                        if ui.small_button("✖").clicked() {
                            dismissed = true;
                        }
                    });
                });
            });

        if dismissed {
            self.current = None;
        } else {
            let remaining = self.timeout.saturating_sub(shown_at.elapsed());
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Default for NotificationArea {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
