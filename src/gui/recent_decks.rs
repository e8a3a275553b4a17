use std::{
    collections::VecDeque,
    path::Path,
};

use serde::{
    Deserialize,
    Serialize,
};

pub const RECENT_DECKS_FILE: &str = "recent_decks.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDeckEntry {
    pub file_path: String,
    pub card_count: usize,
    pub last_opened: chrono::DateTime<chrono::Utc>,
}

impl RecentDeckEntry {
    pub fn new(file_path: String, card_count: usize) -> Self {
        Self { file_path, card_count, last_opened: chrono::Utc::now() }
    }

    pub fn file_exists(&self) -> bool {
        Path::new(&self.file_path).exists()
    }

    pub fn format_last_opened(&self) -> String {
        let local_time = self.last_opened.with_timezone(&chrono::Local);
        local_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn format_card_count(&self) -> String {
        if self.card_count == 1 {
            "1 card".to_string()
        } else {
            format!("{} cards", self.card_count)
        }
    }

    pub fn get_filename(&self) -> String {
        Path::new(&self.file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("Unknown")
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentDecks {
    decks: VecDeque<RecentDeckEntry>,
    max_entries: usize,
}

impl Default for RecentDecks {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RecentDecks {
    pub fn new(max_entries: usize) -> Self {
        Self { decks: VecDeque::new(), max_entries }
    }

    pub fn add_deck(&mut self, file_path: String, card_count: usize) {
        self.decks.retain(|entry| entry.file_path != file_path);
        self.decks.push_front(RecentDeckEntry::new(file_path, card_count));

        while self.decks.len() > self.max_entries {
            self.decks.pop_back();
        }
    }

    pub fn get_valid_decks(&self) -> Vec<&RecentDeckEntry> {
        self.decks.iter().filter(|entry| entry.file_exists()).collect()
    }

    pub fn remove_deck(&mut self, file_path: &str) {
        self.decks.retain(|entry| entry.file_path != file_path);
    }

    pub fn clear(&mut self) {
        self.decks.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }
}
