use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    http,
    FlashdeckError,
};

pub const DEFAULT_DECK_FILE: &str = "flashcards.json";

/// Where the optional default deck is looked up at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum DefaultDeckSource {
    File(PathBuf),
    Url(String),
}

impl Default for DefaultDeckSource {
    fn default() -> Self {
        DefaultDeckSource::File(PathBuf::from(DEFAULT_DECK_FILE))
    }
}

impl DefaultDeckSource {
    pub fn describe(&self) -> String {
        match self {
            DefaultDeckSource::File(path) => path.display().to_string(),
            DefaultDeckSource::Url(url) => url.clone(),
        }
    }
}

pub fn read_deck_file(path: &Path) -> Result<String, FlashdeckError> {
    fs::read_to_string(path).map_err(|e| FlashdeckError::ReadFailure {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Trims pasted text. `None` means there is nothing to load.
pub fn prepare_pasted(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

pub fn fetch_default_deck(source: &DefaultDeckSource) -> Result<String, FlashdeckError> {
    match source {
        DefaultDeckSource::File(path) => fs::read_to_string(path).map_err(|e| {
            FlashdeckError::ResourceUnavailable(format!("{}: {}", path.display(), e))
        }),
        DefaultDeckSource::Url(url) => {
            let client = http::http_client()?;
            http::fetch_text(&client, url)
        }
    }
}

pub fn is_deck_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
