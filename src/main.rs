//! Folio - terminal browser for a hierarchical content tree
//!
//! Binary entry point: parses arguments, sets up logging and configuration,
//! then runs either the TUI or headless mode.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use folio_app::config::{init_config_dir, load_settings};
use folio_core::logging;
use folio_core::prelude::*;

/// Folio - browse a content tree of categories, subcategories and articles
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Browse a static content tree in the terminal", long_about = None)]
struct Args {
    /// Content document: file path or http(s) URL (overrides the config file)
    #[arg(value_name = "SOURCE")]
    source: Option<String>,

    /// Directory containing .folio/config.toml [default: current directory]
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Print the rendered view as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Location to render in headless mode, e.g. "Nature/Forests/0".
    /// Write a "/" inside a name as "\/" and a backslash as "\\".
    #[arg(long, value_name = "PATH", requires = "headless")]
    at: Option<String>,

    /// Write a default .folio/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Log to file, since the TUI owns stdout
    logging::init()?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        init_config_dir(&config_dir).context("Failed to initialize config")?;
        eprintln!(
            "Created {}",
            config_dir.join(".folio").join("config.toml").display()
        );
        return Ok(());
    }

    let mut settings = load_settings(&config_dir);
    if let Some(source) = args.source {
        settings.content.source = source;
    }
    let source = settings
        .content
        .document_source()
        .context("Invalid content source")?;
    info!("Content source: {}", source);

    let result = if args.headless {
        headless::run(&source, args.at.as_deref()).await
    } else {
        folio_tui::run(source, settings)
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Folio exiting");
    result
}
