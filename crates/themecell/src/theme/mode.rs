//! The light/dark theme mode and its toggle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cell::ObservableCell;

/// Which of the two themes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, light first.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn is_light(self) -> bool {
        matches!(self, ThemeMode::Light)
    }

    /// The lowercase name, as used in configuration and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeModeError {
    input: String,
}

impl fmt::Display for ParseThemeModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme mode '{}' (expected 'light' or 'dark')",
            self.input
        )
    }
}

impl std::error::Error for ParseThemeModeError {}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    /// Parses `light` or `dark`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(ThemeMode::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(ThemeMode::Dark)
        } else {
            Err(ParseThemeModeError {
                input: s.to_string(),
            })
        }
    }
}

/// Flips the mode held by `cell` between light and dark.
///
/// Listeners on the cell are notified once with the new mode.
pub fn toggle_theme(cell: &ObservableCell<ThemeMode>) {
    cell.update(|mode| {
        let next = mode.toggled();
        tracing::debug!(from = %mode, to = %next, "toggling theme");
        next
    });
}
