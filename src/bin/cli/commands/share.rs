use std::path::Path;

use anyhow::{Context, Result};
use flashlink_lib::codec::{share_url, SharePage};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    file: Option<&Path>,
    page: SharePage,
    base_url: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let set = app.read_card_set(file)?;
    let base_url = base_url.unwrap_or(app.settings.base_url.as_str());
    let url = share_url(&app.codec, base_url, page, &set).context("Failed to generate shareable URL")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": set.id,
                "page": page.as_str(),
                "url": url,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", url),
    }

    Ok(())
}
