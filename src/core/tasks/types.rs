use std::path::PathBuf;

use crate::core::{
    models::LoadOrigin,
    FlashdeckError,
};

#[derive(Debug)]
pub enum TaskResult {
    DefaultDeck(Result<String, FlashdeckError>),
    /// `seq` orders file reads by when they were requested.
    DeckFile { seq: u64, path: PathBuf, origin: LoadOrigin, result: Result<String, FlashdeckError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::DefaultDeck(_) => "default_deck",
            TaskResult::DeckFile { .. } => "deck_file",
        }
    }
}
