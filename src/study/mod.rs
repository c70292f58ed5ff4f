//! Study sessions over a decoded card set
//!
//! This module provides:
//! - Study options (shuffled order, flipped faces)
//! - Answer tracking with a follow-up round over missed cards
//! - Progress and score metrics

pub mod session;

pub use session::{CardFaces, StudyOptions, StudySession, StudyState};
