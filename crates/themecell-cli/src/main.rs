//! themecell CLI - toggle, preview and check theme configuration
//!
//! ## Quick Start
//!
//! ```bash
//! # Flip the theme three times, starting from light
//! themecell toggle --times 3
//!
//! # Preview the palette of a configuration file
//! themecell palette --config styling.yaml --mode dark
//!
//! # Validate a configuration file
//! themecell check --config styling.json
//! ```

use anyhow::Result;
use clap::Parser;

mod commands;

use commands::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Toggle(args) => commands::toggle::run(args),
        Command::Palette(args) => commands::palette::run(args),
        Command::Check(args) => commands::check::run(args),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_directives = match verbose {
        0 => "warn",
        1 => "warn,themecell=debug",
        _ => "warn,themecell=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
