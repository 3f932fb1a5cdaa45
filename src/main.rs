//! linkdex - Main entry point
//!
//! Parses the CLI, loads the catalogue, and either launches the TUI or runs
//! one of the headless subcommands.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};

use linkdex::cli::{Cli, Commands};
use linkdex::ui::screens::stars;
use linkdex::{visible_items, App, Catalogue};

/// Initialize the tracing subscriber; RUST_LOG overrides the default level
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("linkdex starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let catalogue = load_catalogue(cli.catalogue.as_deref())?;

    match cli.command {
        Some(Commands::List {
            search,
            min_rating,
            json,
        }) => run_list(&catalogue, &search, min_rating, json)?,
        Some(Commands::Validate { file }) => run_validate(&file),
        None => {
            info!("no command specified, launching TUI");
            run_tui(catalogue)?;
        }
    }

    Ok(())
}

/// Load the catalogue from an override file, or fall back to the built-in list
fn load_catalogue(path: Option<&Path>) -> anyhow::Result<Catalogue> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading catalogue file");
            Catalogue::load_from_file(path)
                .with_context(|| format!("failed to load catalogue from {}", path.display()))
        }
        None => Ok(Catalogue::default()),
    }
}

/// Print the filtered catalogue headlessly
fn run_list(catalogue: &Catalogue, search: &str, min_rating: u8, json: bool) -> anyhow::Result<()> {
    let visible = visible_items(&catalogue.items, search, min_rating);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    for item in &visible {
        println!("{}  {}  {}", stars(item.rating), item.name, item.url);
    }
    if visible.is_empty() {
        eprintln!("no items match the given filter");
    }
    Ok(())
}

/// Validate a catalogue file and exit non-zero on failure
fn run_validate(file: &Path) {
    match Catalogue::load_from_file(file) {
        Ok(catalogue) => {
            info!("catalogue validation successful");
            println!(
                "✓ Catalogue file is valid: {} ({} items)",
                file.display(),
                catalogue.len()
            );
        }
        Err(e) => {
            error!(%e, "catalogue validation failed");
            eprintln!("✗ Catalogue file is invalid: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the TUI
fn run_tui(catalogue: Catalogue) -> anyhow::Result<()> {
    debug!("initializing terminal for TUI mode");

    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend).context("failed to create terminal");

    let result = match terminal {
        Ok(mut terminal) => {
            let mut app = App::new(catalogue);
            app.run(&mut terminal).map_err(anyhow::Error::from)
        }
        Err(e) => Err(e),
    };

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
