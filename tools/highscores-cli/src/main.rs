//! Highscores CLI - remove entries from OpenRCT2's scenario highscores
//!
//! # Commands
//!
//! - `highscores` / `highscores edit` - Interactively pick scenarios to remove
//! - `highscores list` - Print every record in the file
//! - `highscores remove --name <NAME>... [--yes]` - Remove by name without prompting
//!
//! # File selection
//!
//! `--file` wins, then `highscores_file` from `config.toml`, then the
//! platform default used by OpenRCT2.
//!
//! # Config (config.toml)
//!
//! ```toml
//! highscores_file = "/path/to/highscores.dat"
//! backup_on_save = true
//! ```

mod config;
mod console;
mod edit;
mod list;
mod paths;
mod remove;
mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use console::Console;

/// Highscores CLI - edit OpenRCT2 scenario highscores
#[derive(Parser)]
#[command(name = "highscores")]
#[command(about = "Remove entries from OpenRCT2 scenario highscores")]
#[command(version)]
struct Cli {
    /// Highscores file (defaults to config, then the OpenRCT2 location)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Copy the original to <file>.bak before saving
    #[arg(long, global = true)]
    backup: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively pick scenarios to remove (default)
    Edit,

    /// Print every record in the file
    List,

    /// Remove scenarios by name without prompting
    Remove(remove::RemoveArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so prompts on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load();
    let path = paths::resolve(cli.file, &config);
    let backup = cli.backup || config.backup_on_save;

    match cli.command.unwrap_or(Commands::Edit) {
        Commands::Edit => {
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
            edit::execute(&mut console, path, backup)
        }
        Commands::List => list::execute(&require_path(path)?, &mut io::stdout().lock()),
        Commands::Remove(args) => {
            remove::execute(&require_path(path)?, args, backup, &mut io::stdout().lock())
        }
    }
}

fn require_path(path: Option<PathBuf>) -> Result<PathBuf> {
    path.context("No highscores file location known for this platform; pass --file")
}
