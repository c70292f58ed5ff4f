//! Saved list index entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flashcards::CardSet;

/// A card set the user kept for later, stored as its share token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedList {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub card_count: usize,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    /// Share token for the set; entries without one predate token storage
    #[serde(default)]
    pub encoded_data: String,
}

impl SavedList {
    pub fn new(list: &CardSet, encoded_data: String) -> Self {
        let now = Utc::now();
        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            card_count: list.cards.len(),
            created_at: now,
            last_accessed: now,
            encoded_data,
        }
    }

    pub fn has_encoded_data(&self) -> bool {
        !self.encoded_data.is_empty()
    }
}
