use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linkdex - a terminal catalogue browser with a feedback form
#[derive(Parser)]
#[command(name = "linkdex")]
#[command(about = "Browse a rated link catalogue and leave feedback, in the terminal")]
#[command(version)]
pub struct Cli {
    /// Catalogue file (JSON array of items) overriding the built-in list
    #[arg(long, global = true, value_name = "FILE")]
    pub catalogue: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the filtered catalogue without launching the TUI
    List {
        /// Case-insensitive substring to match against item names
        #[arg(short, long, default_value = "")]
        search: String,

        /// Minimum rating an item must carry to be listed
        #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
        min_rating: u8,

        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalogue file
    Validate {
        /// Path to the catalogue file to validate
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
