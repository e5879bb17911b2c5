//! Check command implementation.

use anyhow::Result;
use console::style;
use std::fmt::{self, Write};

use themecell::config::StylingConfig;

use super::CheckArgs;

/// Run the check command.
///
/// Loading already validates, so reaching the summary means the file is good.
pub fn run(args: CheckArgs) -> Result<()> {
    let config = super::load_config(Some(&args.config))?;
    if args.json {
        println!("{}", config.to_json_string()?);
    } else {
        print!("{}", summary(&config)?);
        println!("{} {}", style("ok:").green().bold(), args.config.display());
    }
    Ok(())
}

/// One line per recognized option.
pub fn summary(config: &StylingConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "content: {} pattern(s)", config.content.len())?;
    for glob in &config.content {
        writeln!(out, "  {}", glob)?;
    }

    writeln!(out, "darkMode: {}", config.dark_mode)?;

    let palettes: Vec<String> = config
        .palettes()
        .iter()
        .map(|(name, shades)| format!("{} ({} shades)", name, shades.len()))
        .collect();
    if palettes.is_empty() {
        writeln!(out, "palettes: none")?;
    } else {
        writeln!(out, "palettes: {}", palettes.join(", "))?;
    }

    if config.plugins.is_empty() {
        writeln!(out, "plugins: none")?;
    } else {
        writeln!(out, "plugins: {}", config.plugins.join(", "))?;
    }
    Ok(out)
}
