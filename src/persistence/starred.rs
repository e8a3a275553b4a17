use std::{
    collections::BTreeSet,
    fs,
    path::PathBuf,
};

use super::get_data_file_path;
use crate::core::FlashdeckError;

/// Storage key of the starred-id array.
pub const STARRED_KEY: &str = "starredFlashcards";

/// Persistence port for the starred card ids.
///
/// Reading never fails: a missing or unreadable store is an empty set.
/// Writing is called on every toggle and must be durable when it returns `Ok`.
pub trait StarStorage {
    fn load_starred(&self) -> BTreeSet<String>;

    fn save_starred(&mut self, starred: &BTreeSet<String>) -> Result<(), FlashdeckError>;
}

/// Stores the ids as a JSON array of strings in a single file.
#[derive(Debug, Clone)]
pub struct JsonStarStorage {
    file_path: PathBuf,
}

impl JsonStarStorage {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    /// `starredFlashcards.json` in the application data directory.
    pub fn in_app_data_dir() -> Self {
        Self::new(get_data_file_path(&format!("{STARRED_KEY}.json")))
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl StarStorage for JsonStarStorage {
    fn load_starred(&self) -> BTreeSet<String> {
        if !self.file_path.exists() {
            return BTreeSet::new();
        }

        let parsed = fs::read_to_string(&self.file_path)
            .map_err(FlashdeckError::from)
            .and_then(|json| serde_json::from_str::<Vec<String>>(&json).map_err(FlashdeckError::from));

        match parsed {
            Ok(ids) => {
                tracing::info!("Loaded {} starred card ids", ids.len());
                ids.into_iter().collect()
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable starred cards at {}: {}",
                    self.file_path.display(),
                    e
                );
                BTreeSet::new()
            }
        }
    }

    fn save_starred(&mut self, starred: &BTreeSet<String>) -> Result<(), FlashdeckError> {
        let ids: Vec<&String> = starred.iter().collect();
        super::save_json_to(&ids, &self.file_path)
            .map_err(|e| FlashdeckError::Storage(e.to_string()))
    }
}

/// Keeps the ids in memory only. Optionally fails every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStarStorage {
    pub starred: BTreeSet<String>,
    pub saves: usize,
    pub fail_writes: bool,
}

impl MemoryStarStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { starred: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }
}

impl StarStorage for MemoryStarStorage {
    fn load_starred(&self) -> BTreeSet<String> {
        self.starred.clone()
    }

    fn save_starred(&mut self, starred: &BTreeSet<String>) -> Result<(), FlashdeckError> {
        if self.fail_writes {
            return Err(FlashdeckError::Storage("storage is read-only".to_string()));
        }
        self.starred = starred.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starredFlashcards.json");
        let mut storage = JsonStarStorage::new(&path);

        assert!(storage.load_starred().is_empty());

        let ids: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();
        storage.save_starred(&ids).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().split_whitespace().collect::<String>(), r#"["a","b"]"#);
        assert_eq!(JsonStarStorage::new(&path).load_starred(), ids);
    }

    #[test]
    fn test_invalid_contents_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("starredFlashcards.json");

        fs::write(&path, "not json").unwrap();
        assert!(JsonStarStorage::new(&path).load_starred().is_empty());

        fs::write(&path, r#"{"ids":["1"]}"#).unwrap();
        assert!(JsonStarStorage::new(&path).load_starred().is_empty());
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let mut storage = MemoryStarStorage::failing();
        let ids: BTreeSet<String> = ["1".to_string()].into_iter().collect();

        assert!(matches!(storage.save_starred(&ids), Err(FlashdeckError::Storage(_))));
        assert!(storage.load_starred().is_empty());
        assert_eq!(storage.saves, 0);
    }
}
