//! Styling configuration consumed by the external CSS build tool.
//!
//! This module models the tool's configuration object:
//!
//! - [`StylingConfig`]: content globs, dark-mode strategy, palette extensions, plugins
//! - [`DarkModeStrategy`]: whether dark styles key off a root class or a media query
//! - [`ColorValue`] / [`Rgba`]: palette entries, with hash colors decoded
//! - [`ShadeKey`], [`ColorScale`], [`Palette`]: palette structure
//! - [`ConfigError`]: loading and validation failures
//!
//! The library never invokes the build tool. The only link between the
//! configuration and the theme state is the root class named by
//! [`DarkModeStrategy::marker`], which [`crate::theme::bind_dark_class`]
//! keeps in sync with the current [`crate::ThemeMode`].

mod color;
mod error;
mod palette;
mod styling;

pub use color::{ColorValue, Rgba};
pub use error::ConfigError;
pub use palette::{scale, ColorScale, Palette, ShadeKey};
pub use styling::{
    DarkModeStrategy, StylingConfig, ThemeExtension, ThemeSection, DEFAULT_DARK_CLASS,
};
