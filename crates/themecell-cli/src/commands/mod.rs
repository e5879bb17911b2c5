//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use themecell::config::StylingConfig;
use themecell::ThemeMode;

pub mod check;
pub mod palette;
pub mod toggle;

/// Loads the styling configuration, or the built-in one when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<StylingConfig> {
    match path {
        Some(path) => StylingConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => {
            tracing::debug!("no configuration given, using built-in defaults");
            Ok(StylingConfig::default())
        }
    }
}

/// themecell - observable light/dark theme state
#[derive(Parser)]
#[command(name = "themecell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Toggle the theme and show every notification and the root classes
    Toggle(ToggleArgs),

    /// Print the configured palettes with color swatches
    Palette(PaletteArgs),

    /// Load and validate a styling configuration
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Mode to start from
    #[arg(long, default_value = "light")]
    pub from: ThemeMode,

    /// Number of toggles to perform
    #[arg(short = 'n', long, default_value_t = 1)]
    pub times: usize,

    /// Styling configuration (.json, .yaml or .yml); built-in defaults otherwise
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct PaletteArgs {
    /// Theme mode to preview under
    #[arg(long, default_value = "light")]
    pub mode: ThemeMode,

    /// Styling configuration (.json, .yaml or .yml); built-in defaults otherwise
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Styling configuration to check (.json, .yaml or .yml)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Print the normalized configuration as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}
