//! The styling configuration object handed to the external build tool.

use cssparser::{Parser, ParserInput, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::color::ColorValue;
use super::error::ConfigError;
use super::palette::{scale, ColorScale, Palette, ShadeKey};

/// Class applied to the root element when the dark theme is active.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// How the build tool decides when dark styles apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDarkMode", into = "RawDarkMode")]
pub enum DarkModeStrategy {
    /// Dark styles apply while `marker` is on the root element's class list.
    Class { marker: String },
    /// Dark styles follow the `prefers-color-scheme` media query. This is
    /// the build tool's own default.
    #[default]
    Media,
}

impl DarkModeStrategy {
    /// The `class` strategy with the standard `dark` marker.
    pub fn class() -> Self {
        DarkModeStrategy::Class {
            marker: DEFAULT_DARK_CLASS.to_string(),
        }
    }

    /// The root class to toggle, if this strategy uses one.
    pub fn marker(&self) -> Option<&str> {
        match self {
            DarkModeStrategy::Class { marker } => Some(marker),
            DarkModeStrategy::Media => None,
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkModeStrategy::Class { marker } if marker == DEFAULT_DARK_CLASS => {
                f.write_str("class")
            }
            DarkModeStrategy::Class { marker } => write!(f, "class (.{})", marker),
            DarkModeStrategy::Media => f.write_str("media"),
        }
    }
}

/// Wire form: `"class"`, `"selector"`, `"media"` or `["class", ".marker"]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDarkMode {
    Name(String),
    WithSelector(String, String),
}

impl TryFrom<RawDarkMode> for DarkModeStrategy {
    type Error = ConfigError;

    fn try_from(raw: RawDarkMode) -> Result<Self, Self::Error> {
        match raw {
            RawDarkMode::Name(name) => match name.as_str() {
                "class" | "selector" => Ok(DarkModeStrategy::class()),
                "media" => Ok(DarkModeStrategy::Media),
                _ => Err(ConfigError::UnsupportedDarkMode { value: name }),
            },
            RawDarkMode::WithSelector(name, selector) => {
                if name != "class" && name != "selector" {
                    return Err(ConfigError::UnsupportedDarkMode { value: name });
                }
                let marker = class_selector_name(&selector).ok_or_else(|| {
                    ConfigError::UnsupportedDarkMode {
                        value: format!("[{}, {}]", name, selector),
                    }
                })?;
                Ok(DarkModeStrategy::Class { marker })
            }
        }
    }
}

impl From<DarkModeStrategy> for RawDarkMode {
    fn from(strategy: DarkModeStrategy) -> Self {
        match strategy {
            DarkModeStrategy::Class { marker } if marker == DEFAULT_DARK_CLASS => {
                RawDarkMode::Name("class".to_string())
            }
            DarkModeStrategy::Class { marker } => {
                RawDarkMode::WithSelector("class".to_string(), format!(".{}", marker))
            }
            DarkModeStrategy::Media => RawDarkMode::Name("media".to_string()),
        }
    }
}

/// Extracts `name` from a lone class selector `.name`.
fn class_selector_name(selector: &str) -> Option<String> {
    let mut input = ParserInput::new(selector.trim());
    let mut parser = Parser::new(&mut input);
    match parser.next() {
        Ok(Token::Delim('.')) => {}
        _ => return None,
    }
    // Whitespace between the dot and the name makes it a different selector.
    let name = match parser.next_including_whitespace() {
        Ok(Token::Ident(name)) => {
            let name: &str = name;
            name.to_owned()
        }
        _ => return None,
    };
    parser.is_exhausted().then_some(name)
}

/// The `theme` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// The `theme.extend` section: additions merged over the tool's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtension {
    #[serde(default)]
    pub colors: Palette,
}

/// Options recognized by the styling build tool.
///
/// Field names follow the tool's camelCase spelling, so the same JSON or YAML
/// document can be shared with it.
///
/// # Example
///
/// ```rust
/// use themecell::config::{DarkModeStrategy, StylingConfig};
///
/// let config = StylingConfig::from_json_str(r##"{
///     "content": ["./src/**/*.svelte"],
///     "darkMode": "class",
///     "theme": { "extend": { "colors": { "brand": { "500": "#3b82f6" } } } }
/// }"##).unwrap();
///
/// assert_eq!(config.dark_mode, DarkModeStrategy::class());
/// assert_eq!(config.color("brand", "500").unwrap().as_str(), "#3b82f6");
/// assert!(config.plugins.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingConfig {
    /// Glob patterns scanned for class usage.
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub dark_mode: DarkModeStrategy,
    #[serde(default)]
    pub theme: ThemeSection,
    /// Plugin names, in load order.
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// The StreetWatch frontend configuration.
impl Default for StylingConfig {
    fn default() -> Self {
        let mut colors = Palette::new();
        colors.insert("blue".to_string(), builtin_scale(&[(50, "#f0f9ff"), (900, "#1e3a8a")]));
        colors.insert(
            "purple".to_string(),
            builtin_scale(&[(50, "#faf5ff"), (900, "#4c1d95")]),
        );

        Self {
            content: vec!["./src/**/*.{html,js,svelte,ts}".to_string()],
            dark_mode: DarkModeStrategy::class(),
            theme: ThemeSection {
                extend: ThemeExtension { colors },
            },
            plugins: Vec::new(),
        }
    }
}

fn builtin_scale(entries: &[(u16, &'static str)]) -> ColorScale {
    // Literals below always parse.
    scale(entries.iter().copied()).unwrap_or_default()
}

impl StylingConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: StylingConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: StylingConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format from its extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&source)?;
        tracing::debug!(
            path = %path.display(),
            palettes = config.palettes().len(),
            dark_mode = %config.dark_mode,
            "loaded styling configuration"
        );
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the structural rules the build tool relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `content` is empty or holds a
    /// blank pattern, or when a palette is unnamed, empty, or has a blank
    /// shade key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::invalid(
                "`content` must list at least one file pattern",
            ));
        }
        if self.content.iter().any(|glob| glob.trim().is_empty()) {
            return Err(ConfigError::invalid("`content` contains an empty pattern"));
        }
        if self.plugins.iter().any(|plugin| plugin.trim().is_empty()) {
            return Err(ConfigError::invalid("`plugins` contains an empty name"));
        }

        for (name, shades) in self.palettes() {
            if name.trim().is_empty() {
                return Err(ConfigError::invalid("palette with an empty name"));
            }
            if shades.is_empty() {
                return Err(ConfigError::invalid(format!(
                    "palette '{}' has no shades",
                    name
                )));
            }
            if shades
                .keys()
                .any(|key| matches!(key, ShadeKey::Named(n) if n.trim().is_empty()))
            {
                return Err(ConfigError::invalid(format!(
                    "palette '{}' has an empty shade key",
                    name
                )));
            }
        }
        Ok(())
    }

    /// The extended palettes, keyed by name.
    pub fn palettes(&self) -> &Palette {
        &self.theme.extend.colors
    }

    /// Looks up one shade, e.g. `color("blue", "900")`.
    pub fn color(&self, palette: &str, shade: &str) -> Option<&ColorValue> {
        self.palettes().get(palette)?.get(&ShadeKey::from(shade))
    }
}
