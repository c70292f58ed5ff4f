//! Saved list storage
//!
//! All entries live in a single `saved_lists.json` array in the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use super::models::SavedList;
use crate::codec::{Codec, CodecError};
use crate::flashcards::CardSet;

#[derive(Error, Debug)]
pub enum SavedListsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Saved list not found: {0}")]
    NotFound(String),

    #[error("Could not determine the data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, SavedListsError>;

/// File-backed index of saved card sets
pub struct SavedListsStorage {
    /// Base path for app data (e.g., ~/.local/share/flashlink)
    base_path: PathBuf,
}

impl SavedListsStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Default application data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashlink"))
            .ok_or(SavedListsError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path to saved_lists.json
    fn index_file(&self) -> PathBuf {
        self.base_path.join("saved_lists.json")
    }

    fn write_all(&self, lists: &[SavedList]) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        fs::write(self.index_file(), serde_json::to_string_pretty(lists)?)?;
        Ok(())
    }

    /// List all saved lists in stored order
    pub fn list(&self) -> Result<Vec<SavedList>> {
        let path = self.index_file();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let lists: Vec<SavedList> = serde_json::from_str(&content)?;
        let total = lists.len();
        let lists: Vec<SavedList> = lists.into_iter().filter(SavedList::has_encoded_data).collect();
        if lists.len() < total {
            log::info!("Dropped {} saved lists without encoded data", total - lists.len());
        }
        Ok(lists)
    }

    pub fn get(&self, id: &str) -> Result<SavedList> {
        self.list()?
            .into_iter()
            .find(|l| l.id == id)
            .ok_or_else(|| SavedListsError::NotFound(id.to_string()))
    }

    pub fn is_saved(&self, id: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|l| l.id == id))
    }

    /// Save a card set, replacing any earlier entry with the same id.
    ///
    /// Re-saving keeps the original creation time.
    pub fn save(&self, list: &CardSet, codec: &Codec) -> Result<SavedList> {
        let encoded = codec.encode(list)?;
        let mut lists = self.list()?;
        let mut saved = SavedList::new(list, encoded);

        match lists.iter_mut().find(|l| l.id == list.id) {
            Some(existing) => {
                saved.created_at = existing.created_at;
                *existing = saved.clone();
                log::info!("Updated saved list {}", list.id);
            }
            None => {
                lists.push(saved.clone());
                log::info!("Saved new list {}", list.id);
            }
        }

        self.write_all(&lists)?;
        Ok(saved)
    }

    /// Remove a saved list. Removing an unknown id is not an error.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut lists = self.list()?;
        let before = lists.len();
        lists.retain(|l| l.id != id);
        if lists.len() != before {
            self.write_all(&lists)?;
        }
        Ok(())
    }

    pub fn update_last_accessed(&self, id: &str) -> Result<()> {
        let mut lists = self.list()?;
        if let Some(entry) = lists.iter_mut().find(|l| l.id == id) {
            entry.last_accessed = Utc::now();
            self.write_all(&lists)?;
        }
        Ok(())
    }

    /// Decode a saved list back into its card set and mark it accessed
    pub fn open(&self, id: &str, codec: &Codec) -> Result<CardSet> {
        let saved = self.get(id)?;
        let list = codec.decode(&saved.encoded_data)?;
        self.update_last_accessed(id)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashcards::Card;
    use tempfile::TempDir;

    fn create_test_storage() -> (SavedListsStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = SavedListsStorage::new(temp_dir.path().join("data"));
        (storage, temp_dir)
    }

    fn capitals() -> CardSet {
        CardSet::new("abc123", "Capitals", vec![Card::new("c1", "France", "Paris")])
    }

    #[test]
    fn test_empty_when_no_file() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.list().unwrap().is_empty());
        assert!(!storage.is_saved("abc123").unwrap());
    }

    #[test]
    fn test_save_and_open() {
        let (storage, _temp) = create_test_storage();
        let codec = Codec::default();

        let saved = storage.save(&capitals(), &codec).unwrap();
        assert_eq!(saved.card_count, 1);
        assert_eq!(saved.title, "Capitals");
        assert!(storage.is_saved("abc123").unwrap());

        let opened = storage.open("abc123", &codec).unwrap();
        assert_eq!(opened, capitals());
    }

    #[test]
    fn test_resave_updates_in_place() {
        let (storage, _temp) = create_test_storage();
        let codec = Codec::default();

        let first = storage.save(&capitals(), &codec).unwrap();

        let mut edited = capitals();
        edited.title = "World capitals".to_string();
        edited.cards.push(Card::new("c2", "Japan", "Tokyo"));
        let second = storage.save(&edited, &codec).unwrap();

        let lists = storage.list().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].title, "World capitals");
        assert_eq!(lists[0].card_count, 2);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.last_accessed >= first.last_accessed);
    }

    #[test]
    fn test_delete() {
        let (storage, _temp) = create_test_storage();
        let codec = Codec::default();
        storage.save(&capitals(), &codec).unwrap();
        storage.save(&CardSet::new("other", "Other", vec![]), &codec).unwrap();

        storage.delete("abc123").unwrap();
        let ids: Vec<_> = storage.list().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["other"]);

        storage.delete("missing").unwrap();
        assert!(matches!(storage.get("abc123"), Err(SavedListsError::NotFound(_))));
    }

    #[test]
    fn test_entries_without_token_are_dropped() {
        let (storage, _temp) = create_test_storage();
        fs::create_dir_all(storage.base_path()).unwrap();
        fs::write(
            storage.index_file(),
            r#"[
                {"id":"old","title":"Old","cardCount":3,"createdAt":"2024-01-01T00:00:00Z","lastAccessed":"2024-01-02T00:00:00Z","viewUrl":"/view#x"},
                {"id":"new","title":"New","cardCount":0,"createdAt":"2024-01-01T00:00:00Z","lastAccessed":"2024-01-02T00:00:00Z","encodedData":"abc"}
            ]"#,
        )
        .unwrap();

        let lists = storage.list().unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, "new");
    }

    #[test]
    fn test_open_corrupt_token_surfaces_codec_error() {
        let (storage, _temp) = create_test_storage();
        fs::create_dir_all(storage.base_path()).unwrap();
        fs::write(
            storage.index_file(),
            r#"[{"id":"bad","createdAt":"2024-01-01T00:00:00Z","lastAccessed":"2024-01-01T00:00:00Z","encodedData":"!!"}]"#,
        )
        .unwrap();

        let err = storage.open("bad", &Codec::default()).unwrap_err();
        assert!(matches!(err, SavedListsError::Codec(_)));
    }

    #[test]
    fn test_save_rejects_oversized_set() {
        let (storage, _temp) = create_test_storage();
        let codec = Codec::new(crate::codec::CodecLimits {
            max_token_length: 8,
            ..Default::default()
        });
        let err = storage.save(&capitals(), &codec).unwrap_err();
        assert!(matches!(err, SavedListsError::Codec(CodecError::PayloadTooLarge { .. })));
        assert!(storage.list().unwrap().is_empty());
    }
}
