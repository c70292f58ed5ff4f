use std::path::Path;

use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, file: Option<&Path>, format: &OutputFormat) -> Result<()> {
    let set = app.read_card_set(file)?;
    let token = app.codec.encode(&set).context("Failed to encode card set")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": set.id,
                "cardCount": set.cards.len(),
                "length": token.len(),
                "limit": app.codec.limits().max_token_length,
                "token": token,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", token);
        }
    }

    Ok(())
}
