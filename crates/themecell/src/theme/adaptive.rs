//! Values that come in a light and a dark variant.

use super::mode::ThemeMode;

/// A pair of values, one per [`ThemeMode`].
///
/// Use this for anything that differs between the two themes: a palette
/// shade, a style, a label.
///
/// # Example
///
/// ```rust
/// use themecell::{Adaptive, ThemeMode};
///
/// let background = Adaptive::new("#f0f9ff", "#1e3a8a");
/// assert_eq!(*background.resolve(ThemeMode::Dark), "#1e3a8a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adaptive<T> {
    light: T,
    dark: T,
}

impl<T> Adaptive<T> {
    /// Creates an adaptive value with separate light and dark variants.
    pub fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for `mode`.
    pub fn resolve(&self, mode: ThemeMode) -> &T {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &T {
        &self.light
    }

    pub fn dark(&self) -> &T {
        &self.dark
    }

    /// Applies `f` to both variants.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Adaptive<U> {
        Adaptive {
            light: f(self.light),
            dark: f(self.dark),
        }
    }
}
