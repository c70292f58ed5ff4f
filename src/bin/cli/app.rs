use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use flashlink_lib::codec::Codec;
use flashlink_lib::flashcards::{validate_card_text, CardSet, MAX_CARD_TEXT_LENGTH};
use flashlink_lib::saved_lists::SavedListsStorage;
use flashlink_lib::settings::{load_settings, Settings};

/// Shared application state for CLI commands
pub struct App {
    pub settings: Settings,
    pub codec: Codec,
    pub saved_lists: SavedListsStorage,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => SavedListsStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let settings = load_settings(&data_dir)
            .with_context(|| format!("Failed to load settings from {}", data_dir.display()))?;
        let codec = settings.codec();

        Ok(Self {
            settings,
            codec,
            saved_lists: SavedListsStorage::new(data_dir),
        })
    }

    /// Read a card set as JSON from a file, or stdin when no file (or "-") is given
    pub fn read_card_set(&self, file: Option<&Path>) -> Result<CardSet> {
        let content = match file {
            Some(path) if path != Path::new("-") => {
                fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
            }
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read card set from stdin")?;
                buf
            }
        };

        let set: CardSet = serde_json::from_str(&content).context("Card set is not valid JSON")?;
        for card in &set.cards {
            if !validate_card_text(&card.front) || !validate_card_text(&card.back) {
                log::warn!(
                    "Card {} exceeds {} characters per side",
                    card.id,
                    MAX_CARD_TEXT_LENGTH
                );
            }
        }
        Ok(set)
    }
}
