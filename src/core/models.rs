use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use super::FlashdeckError;

const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "definition"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,         // Identity used for starring
    pub title: String,      // Front of the card
    pub definition: String, // Back of the card
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, definition: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), definition: definition.into() }
    }

    fn from_value_lossy(value: &Value) -> Self {
        let field = |name: &str| match value.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            _ => String::new(),
        };

        Self { id: field("id"), title: field("title"), definition: field("definition") }
    }
}

/// Parses a deck payload.
///
/// Only the first element is checked for the `id`/`title`/`definition`
/// string fields. Remaining elements are converted leniently, so a
/// non-string or missing field becomes text or an empty string instead of
/// rejecting the whole deck.
pub fn parse_deck(payload: &str) -> Result<Vec<Card>, FlashdeckError> {
    let parsed: Value = serde_json::from_str(payload)?;

    let Value::Array(items) = parsed else {
        return Err(FlashdeckError::schema("JSON data must be an array of flashcard objects."));
    };

    if let Some(first) = items.first() {
        let well_formed = first.is_object()
            && REQUIRED_FIELDS.iter().all(|name| first.get(name).is_some_and(Value::is_string));

        if !well_formed {
            return Err(FlashdeckError::schema(
                "Each flashcard object must have 'id' (string), 'title' (string), and 'definition' (string) properties.",
            ));
        }
    }

    Ok(items.iter().map(Card::from_value_lossy).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Upload,
    Paste,
    DroppedFile,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Empty,
    Viewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}
