use anyhow::{Context, Result};

use crate::app::App;
use crate::render::render_card_set;
use crate::OutputFormat;

pub fn run(app: &App, input: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let set = app
        .codec
        .decode_fragment(input)
        .context("Link does not contain a valid flashcard set")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
        OutputFormat::Plain => println!("{}", render_card_set(&set, use_color)),
    }

    Ok(())
}
