//! Saved lists index
//!
//! Keeps track of card sets the user wants to come back to. Each entry stores
//! the set's share token, so reopening a list goes through the same decode
//! path as following a link.

pub mod models;
pub mod storage;

pub use models::SavedList;
pub use storage::{SavedListsError, SavedListsStorage};
