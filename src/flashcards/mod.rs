//! Flashcard sets for Flashlink
//!
//! This module provides:
//! - The card and card-set data model shared by every other module
//! - Id generation and card text validation

pub mod models;

pub use models::*;
