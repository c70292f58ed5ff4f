use std::path::Path;

use anyhow::{Context, Result};
use flashlink_lib::saved_lists::SavedList;

use crate::app::App;
use crate::render::render_card_set;
use crate::OutputFormat;

fn saved_json(saved: &SavedList) -> serde_json::Value {
    serde_json::json!({
        "id": saved.id,
        "title": saved.title,
        "cardCount": saved.card_count,
        "createdAt": saved.created_at.to_rfc3339(),
        "lastAccessed": saved.last_accessed.to_rfc3339(),
        "encodedData": saved.encoded_data,
    })
}

fn print_saved(saved: &SavedList, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&saved_json(saved))?),
        OutputFormat::Plain => {
            println!("Saved \"{}\" ({} cards)", saved.title, saved.card_count);
            println!("  ID: {}", saved.id);
        }
    }
    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat) -> Result<()> {
    let mut lists = app.saved_lists.list().context("Failed to load saved lists")?;
    lists.sort_by(|a, b| b.last_accessed.cmp(&a.last_accessed));

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = lists.iter().map(saved_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if lists.is_empty() {
                println!("No saved lists.");
                return Ok(());
            }

            let title_width = lists.iter().map(|l| l.title.chars().count()).max().unwrap_or(5).clamp(5, 40);
            println!("{:<tw$} {:>5}  {:<16} {}", "Title", "Cards", "Last opened", "ID", tw = title_width);
            for list in &lists {
                let title: String = list.title.chars().take(title_width).collect();
                println!(
                    "{:<tw$} {:>5}  {:<16} {}",
                    title,
                    list.card_count,
                    list.last_accessed.format("%Y-%m-%d %H:%M").to_string(),
                    list.id,
                    tw = title_width
                );
            }
        }
    }

    Ok(())
}

pub fn run_save(app: &App, file: Option<&Path>, format: &OutputFormat) -> Result<()> {
    let set = app.read_card_set(file)?;
    let saved = app.saved_lists.save(&set, &app.codec).context("Failed to save list")?;
    print_saved(&saved, format)
}

pub fn run_import(app: &App, input: &str, format: &OutputFormat) -> Result<()> {
    let set = app
        .codec
        .decode_fragment(input)
        .context("Link does not contain a valid flashcard set")?;
    let saved = app.saved_lists.save(&set, &app.codec).context("Failed to save list")?;
    print_saved(&saved, format)
}

pub fn run_open(app: &App, id: &str, format: &OutputFormat, use_color: bool) -> Result<()> {
    let set = app
        .saved_lists
        .open(id, &app.codec)
        .with_context(|| format!("Failed to open saved list '{}'", id))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&set)?),
        OutputFormat::Plain => println!("{}", render_card_set(&set, use_color)),
    }

    Ok(())
}

pub fn run_delete(app: &App, id: &str) -> Result<()> {
    app.saved_lists.delete(id).context("Failed to delete saved list")?;
    println!("Deleted {}", id);
    Ok(())
}
