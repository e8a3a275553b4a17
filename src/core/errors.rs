use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Invalid JSON data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid JSON data: {0}")]
    Schema(String),

    #[error("Default deck unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("Error reading file {path}: {reason}")]
    ReadFailure { path: String, reason: String },

    #[error("Failed to save starred cards: {0}")]
    Storage(String),
}

impl FlashdeckError {
    pub fn schema(message: impl Into<String>) -> Self {
        FlashdeckError::Schema(message.into())
    }

    /// Errors that concern the deck payload itself rather than where it came from.
    pub fn is_invalid_deck(&self) -> bool {
        matches!(self, FlashdeckError::Parse(_) | FlashdeckError::Schema(_))
    }
}

impl From<std::io::Error> for FlashdeckError {
    fn from(error: std::io::Error) -> Self {
        FlashdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlashdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlashdeckError::ResourceUnavailable(error.to_string())
    }
}
