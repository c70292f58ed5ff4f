//! Edit-session state and its actions
//!
//! The state is an ordinary value owned by the caller. Each action mutates
//! only the state it is given.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::{share_url, Codec, CodecError, SharePage};
use crate::flashcards::{validate_card_text, Card, CardFace, CardSet, MAX_CARD_TEXT_LENGTH};

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Card text is limited to {limit} characters")]
    TextTooLong { limit: usize },

    #[error("Please enter a title for your flashcard set!")]
    MissingTitle,

    #[error("Please add at least one flashcard!")]
    NoCards,

    #[error("Please fill in all flashcard fields!")]
    EmptyCardFields,

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, EditorError>;

/// State of a single editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub list: CardSet,
    pub has_unsaved_changes: bool,
    pub share_url: String,
    pub show_share_modal: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(CardSet::empty())
    }
}

impl EditorState {
    pub fn new(list: CardSet) -> Self {
        Self {
            list,
            has_unsaved_changes: false,
            share_url: String::new(),
            show_share_modal: false,
        }
    }

    /// Replace the list being edited, e.g. after opening a link
    pub fn set_list(&mut self, list: CardSet) {
        self.list = list;
        self.has_unsaved_changes = false;
    }

    /// Start over with a fresh empty list
    pub fn reset_to_empty(&mut self) {
        *self = Self::default();
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.list.title = title.into();
        self.has_unsaved_changes = true;
    }

    /// Append an empty card and return its id
    pub fn add_card(&mut self) -> String {
        let card = Card::empty();
        let id = card.id.clone();
        self.list.cards.push(card);
        self.has_unsaved_changes = true;
        id
    }

    /// Set one face of a card.
    ///
    /// Text over the length limit is rejected and leaves the state untouched.
    /// An unknown card id is ignored.
    pub fn update_card(&mut self, card_id: &str, face: CardFace, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if !validate_card_text(&value) {
            return Err(EditorError::TextTooLong {
                limit: MAX_CARD_TEXT_LENGTH,
            });
        }

        if let Some(card) = self.list.card_mut(card_id) {
            *card.face_mut(face) = value;
            self.has_unsaved_changes = true;
        }
        Ok(())
    }

    pub fn delete_card(&mut self, card_id: &str) {
        self.list.cards.retain(|card| card.id != card_id);
        self.has_unsaved_changes = true;
    }

    pub fn mark_saved(&mut self) {
        self.has_unsaved_changes = false;
    }

    /// Encode the list into a view link and remember it
    pub fn generate_share_url(&mut self, codec: &Codec, base_url: &str) -> Result<String> {
        let url = share_url(codec, base_url, SharePage::View, &self.list)?;
        self.share_url = url.clone();
        Ok(url)
    }

    pub fn set_show_share_modal(&mut self, show: bool) {
        self.show_share_modal = show;
    }

    /// Check the list is complete enough to save or share
    pub fn validate_for_saving(&self) -> Result<()> {
        if self.list.title.trim().is_empty() {
            return Err(EditorError::MissingTitle);
        }
        if self.list.cards.is_empty() {
            return Err(EditorError::NoCards);
        }
        let has_empty_cards = self
            .list
            .cards
            .iter()
            .any(|card| card.front.trim().is_empty() || card.back.trim().is_empty());
        if has_empty_cards {
            return Err(EditorError::EmptyCardFields);
        }
        Ok(())
    }

    /// Load the list carried by a `/create#...` link.
    ///
    /// A link that fails to decode leaves the editor on a fresh empty list and
    /// hands the error back so the caller can warn the user.
    pub fn load_from_fragment(&mut self, codec: &Codec, fragment: &str) -> Result<()> {
        match codec.decode_fragment(fragment) {
            Ok(list) => {
                self.set_list(list);
                Ok(())
            }
            Err(e) => {
                self.reset_to_empty();
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ErrorKind;

    fn filled_state() -> EditorState {
        let mut state = EditorState::default();
        state.update_title("Capitals");
        let id = state.add_card();
        state.update_card(&id, CardFace::Front, "France").unwrap();
        state.update_card(&id, CardFace::Back, "Paris").unwrap();
        state
    }

    #[test]
    fn test_add_and_update_card() {
        let state = filled_state();
        assert!(state.has_unsaved_changes);
        assert_eq!(state.list.cards.len(), 1);
        assert_eq!(state.list.cards[0].front, "France");
        assert_eq!(state.list.cards[0].back, "Paris");
    }

    #[test]
    fn test_update_card_rejects_long_text() {
        let mut state = filled_state();
        state.mark_saved();
        let id = state.list.cards[0].id.clone();

        let err = state
            .update_card(&id, CardFace::Front, "x".repeat(MAX_CARD_TEXT_LENGTH + 1))
            .unwrap_err();
        assert!(matches!(err, EditorError::TextTooLong { limit: 200 }));
        assert_eq!(state.list.cards[0].front, "France");
        assert!(!state.has_unsaved_changes);
    }

    #[test]
    fn test_update_unknown_card_is_noop() {
        let mut state = filled_state();
        state.mark_saved();
        state.update_card("missing", CardFace::Back, "x").unwrap();
        assert!(!state.has_unsaved_changes);
    }

    #[test]
    fn test_delete_card_keeps_order() {
        let mut state = EditorState::default();
        let a = state.add_card();
        let b = state.add_card();
        let c = state.add_card();
        state.delete_card(&b);
        let ids: Vec<_> = state.list.cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_set_list_clears_unsaved_flag() {
        let mut state = filled_state();
        state.set_list(CardSet::new("other", "Other", vec![]));
        assert!(!state.has_unsaved_changes);
        assert_eq!(state.list.id, "other");
    }

    #[test]
    fn test_reset_to_empty() {
        let mut state = filled_state();
        state.set_show_share_modal(true);
        state.share_url = "https://x/view#abc".to_string();
        state.reset_to_empty();
        assert!(state.list.cards.is_empty());
        assert!(state.share_url.is_empty());
        assert!(!state.show_share_modal);
    }

    #[test]
    fn test_validate_for_saving_order() {
        let mut state = EditorState::default();
        state.update_title("   ");
        assert!(matches!(state.validate_for_saving(), Err(EditorError::MissingTitle)));

        state.update_title("Capitals");
        assert!(matches!(state.validate_for_saving(), Err(EditorError::NoCards)));

        let id = state.add_card();
        state.update_card(&id, CardFace::Front, "France").unwrap();
        assert!(matches!(state.validate_for_saving(), Err(EditorError::EmptyCardFields)));

        state.update_card(&id, CardFace::Back, "Paris").unwrap();
        assert!(state.validate_for_saving().is_ok());
    }

    #[test]
    fn test_generate_share_url_round_trips() {
        let codec = Codec::default();
        let mut state = filled_state();
        let url = state.generate_share_url(&codec, "https://cards.example").unwrap();
        assert!(url.starts_with("https://cards.example/view#"));
        assert_eq!(state.share_url, url);
        assert_eq!(codec.decode_fragment(&url).unwrap(), state.list);
    }

    #[test]
    fn test_load_from_fragment_success_keeps_identity() {
        let codec = Codec::default();
        let source = filled_state();
        let url = share_url(&codec, "", SharePage::Create, &source.list).unwrap();

        let mut state = EditorState::default();
        state.load_from_fragment(&codec, &url).unwrap();
        assert_eq!(state.list.id, source.list.id);
        assert!(!state.has_unsaved_changes);
    }

    #[test]
    fn test_load_from_fragment_failure_falls_back_to_empty() {
        let codec = Codec::default();
        let mut state = filled_state();
        let err = state.load_from_fragment(&codec, "#not-base64!!").unwrap_err();
        match err {
            EditorError::Codec(e) => assert_eq!(e.kind(), ErrorKind::InvalidTokenFormat),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(state.list.cards.is_empty());
        assert_eq!(state.list.title, crate::flashcards::DEFAULT_TITLE);
    }
}
