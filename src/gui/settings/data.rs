use serde::{
    Deserialize,
    Serialize,
};

use crate::core::source::DefaultDeckSource;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub default_deck: DefaultDeckSource,
    pub notice_seconds: u64,
    pub zoom_factor: f32,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            dark_mode: true,
            default_deck: DefaultDeckSource::default(),
            notice_seconds: 5,
            zoom_factor: 1.2,
        }
    }
}

impl SettingsData {
    pub fn notice_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.notice_seconds.max(1))
    }
}
