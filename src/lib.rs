//! Flashlink: flashcard sets shared as self-contained links
//!
//! A card set travels entirely inside a URL fragment. [`codec`] turns a set
//! into a compact token and back; the remaining modules are the state that
//! sits around it when editing, studying and keeping sets for later.

pub mod codec;
pub mod editor;
pub mod flashcards;
pub mod saved_lists;
pub mod settings;
pub mod study;

pub use codec::{decode, encode, Codec, CodecError, CodecLimits};
pub use flashcards::{Card, CardSet};
