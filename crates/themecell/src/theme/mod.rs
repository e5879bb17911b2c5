//! Theme state: the light/dark mode and everything wired to it.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: light or dark
//! - [`toggle_theme`]: flips the mode held by a cell
//! - [`ThemeContext`]: the application's theme cell, passed around explicitly
//! - [`Adaptive`]: a value with a light and a dark variant
//! - [`bind_dark_class`]: keeps a root element's dark class in sync with the mode

mod adaptive;
mod binding;
mod context;
mod mode;

pub use adaptive::Adaptive;
pub use binding::{bind_dark_class, ClassList, RootClasses};
pub use context::ThemeContext;
pub use mode::{toggle_theme, ParseThemeModeError, ThemeMode};
