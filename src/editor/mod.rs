//! Card set editing session

pub mod state;

pub use state::{EditorError, EditorState};
