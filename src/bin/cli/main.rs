mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flashlink_lib::codec::SharePage;

#[derive(Parser)]
#[command(name = "flashlink-cli", about = "Share flashcard sets as self-contained links", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a card set (JSON) into a share token
    Encode {
        /// Card set JSON file (default: stdin, or "-")
        file: Option<PathBuf>,
    },

    /// Decode a share token or link back into a card set
    Decode {
        /// Token, "#fragment" or full share URL
        input: String,
    },

    /// Print a share link for a card set
    Share {
        /// Card set JSON file (default: stdin, or "-")
        file: Option<PathBuf>,
        /// Page the link opens
        #[arg(long, default_value = "view")]
        page: SharePage,
        /// Origin for the link (default: from settings)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Manage saved lists
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Study a shared card set in the terminal
    Study {
        /// Token, "#fragment" or full share URL
        input: String,
        /// Randomize the order of cards
        #[arg(long)]
        shuffle: bool,
        /// Show the back first and ask for the front
        #[arg(long)]
        flipped: bool,
    },
}

#[derive(Subcommand)]
enum SavedCommand {
    /// List saved card sets
    List,

    /// Save a card set (JSON file or stdin)
    Save {
        /// Card set JSON file (default: stdin, or "-")
        file: Option<PathBuf>,
    },

    /// Save the card set carried by a share link
    Import {
        /// Token, "#fragment" or full share URL
        input: String,
    },

    /// Print a saved card set
    Open {
        /// Saved list id
        id: String,
    },

    /// Delete a saved card set
    Delete {
        /// Saved list id
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        Command::Encode { file } => {
            commands::encode::run(&app, file.as_deref(), &cli.format)?;
        }
        Command::Decode { input } => {
            commands::decode::run(&app, &input, &cli.format, use_color)?;
        }
        Command::Share { file, page, base_url } => {
            commands::share::run(&app, file.as_deref(), page, base_url.as_deref(), &cli.format)?;
        }
        Command::Saved(subcmd) => match subcmd {
            SavedCommand::List => commands::saved::run_list(&app, &cli.format)?,
            SavedCommand::Save { file } => commands::saved::run_save(&app, file.as_deref(), &cli.format)?,
            SavedCommand::Import { input } => commands::saved::run_import(&app, &input, &cli.format)?,
            SavedCommand::Open { id } => commands::saved::run_open(&app, &id, &cli.format, use_color)?,
            SavedCommand::Delete { id } => commands::saved::run_delete(&app, &id)?,
        },
        Command::Study { input, shuffle, flipped } => {
            commands::study::run(&app, &input, shuffle, flipped, use_color)?;
        }
    }

    Ok(())
}
