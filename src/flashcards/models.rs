//! Data models for shareable flashcard sets

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a card face, in characters
pub const MAX_CARD_TEXT_LENGTH: usize = 200;

/// Title given to a freshly created set
pub const DEFAULT_TITLE: &str = "My Flashcards";

/// Which side of a card an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    /// The question side
    Front,
    /// The answer side
    Back,
}

/// A flashcard with question (front) and answer (back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within its set
    pub id: String,
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    /// A card with a fresh id and empty faces, as added by the editor
    pub fn empty() -> Self {
        Self::new(generate_id(), "", "")
    }

    pub fn face(&self, face: CardFace) -> &str {
        match face {
            CardFace::Front => &self.front,
            CardFace::Back => &self.back,
        }
    }

    pub fn face_mut(&mut self, face: CardFace) -> &mut String {
        match face {
            CardFace::Front => &mut self.front,
            CardFace::Back => &mut self.back,
        }
    }
}

/// A titled, ordered collection of cards.
///
/// `id` is stable across edits and re-shares so that a set opened from a link
/// and saved again replaces its earlier entry instead of duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl CardSet {
    pub fn new(id: impl Into<String>, title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards,
        }
    }

    /// A new set with a fresh id, the default title and no cards
    pub fn empty() -> Self {
        Self::new(generate_id(), DEFAULT_TITLE, Vec::new())
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }
}

/// Generate a random identifier for a set or card
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Check a card face against the length limit
pub fn validate_card_text(text: &str) -> bool {
    text.chars().count() <= MAX_CARD_TEXT_LENGTH
}
