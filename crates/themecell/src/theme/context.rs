//! Application-scoped theme state.

use super::mode::{toggle_theme, ThemeMode};
use crate::cell::{ObservableCell, Unsubscribe};

/// The theme state shared by one application.
///
/// Build it once at startup and hand clones to whatever needs to read or
/// change the theme; every clone refers to the same cell.
///
/// # Example
///
/// ```rust
/// use themecell::{ThemeContext, ThemeMode};
///
/// let ctx = ThemeContext::new();
/// let view = ctx.clone();
///
/// ctx.toggle_theme();
/// assert_eq!(view.mode(), ThemeMode::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeContext {
    mode: ObservableCell<ThemeMode>,
}

impl ThemeContext {
    /// Starts in [`ThemeMode::Light`].
    pub fn new() -> Self {
        Self::with_mode(ThemeMode::default())
    }

    pub fn with_mode(mode: ThemeMode) -> Self {
        tracing::debug!(%mode, "theme context created");
        Self {
            mode: ObservableCell::new(mode),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// The underlying cell, for wiring listeners such as
    /// [`bind_dark_class`](super::bind_dark_class).
    pub fn cell(&self) -> &ObservableCell<ThemeMode> {
        &self.mode
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
    }

    /// Switches to the other mode.
    pub fn toggle_theme(&self) {
        toggle_theme(&self.mode);
    }

    /// Registers a listener; it is called right away with the current mode.
    pub fn subscribe(&self, listener: impl Fn(&ThemeMode) + 'static) -> Unsubscribe {
        self.mode.subscribe(listener)
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
