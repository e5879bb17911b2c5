//! Palette command implementation.

use anyhow::Result;
use console::Style;
use std::fmt::{self, Write};

use themecell::config::{ColorValue, StylingConfig};
use themecell::{Adaptive, ThemeMode};

use super::PaletteArgs;

const SWATCH: &str = "      ";

/// Run the palette command.
pub fn run(args: PaletteArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    print!("{}", render(&config, args.mode)?);
    Ok(())
}

fn heading_styles() -> Adaptive<Style> {
    Adaptive::new(Style::new().blue().bold(), Style::new().cyan().bold())
}

fn swatch(color: &ColorValue) -> String {
    match color.rgba() {
        Some(rgba) => {
            // Pick label contrast from the swatch itself, not the theme.
            let ink = if rgba.luminance() > 0.5 {
                Style::new().black()
            } else {
                Style::new().white()
            };
            ink.on_color256(rgba.to_ansi256())
                .apply_to(SWATCH)
                .to_string()
        }
        None => Style::new().dim().apply_to(" ---- ").to_string(),
    }
}

/// Lists every palette and shade, with a 256-color swatch for hash colors.
pub fn render(config: &StylingConfig, mode: ThemeMode) -> Result<String, fmt::Error> {
    let headings = heading_styles();
    let heading = headings.resolve(mode);
    let mut out = String::new();

    if config.palettes().is_empty() {
        writeln!(out, "no palettes configured")?;
        return Ok(out);
    }

    for (name, shades) in config.palettes() {
        writeln!(out, "{} ({} mode)", heading.apply_to(name), mode)?;
        for (shade, color) in shades {
            writeln!(out, "  {} {:>7}  {}", swatch(color), shade, color)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palettes_listed_in_order() {
        console::set_colors_enabled(false);
        let out = render(&StylingConfig::default(), ThemeMode::Light).unwrap();
        let blue = out.find("blue").unwrap();
        let purple = out.find("purple").unwrap();
        assert!(blue < purple);

        let light = out.find("#f0f9ff").unwrap();
        let deep = out.find("#1e3a8a").unwrap();
        assert!(light < deep);
        assert!(out.contains("(light mode)"));
    }

    #[test]
    fn test_non_hash_colors_have_placeholder() {
        console::set_colors_enabled(false);
        let config = StylingConfig::from_json_str(
            r#"{"content": ["*.html"], "theme": {"extend": {"colors": {"ink": {"DEFAULT": "currentColor"}}}}}"#,
        )
        .unwrap();
        let out = render(&config, ThemeMode::Dark).unwrap();
        assert!(out.contains("----"));
        assert!(out.contains("DEFAULT"));
        assert!(out.contains("currentColor"));
        assert!(out.contains("(dark mode)"));
    }

    #[test]
    fn test_empty_palette_message() {
        console::set_colors_enabled(false);
        let config = StylingConfig::from_json_str(r#"{"content": ["*.html"]}"#).unwrap();
        assert_eq!(render(&config, ThemeMode::Light).unwrap(), "no palettes configured\n");
    }
}
