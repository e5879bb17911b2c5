//! # themecell - observable light/dark theme state
//!
//! A small reactive core for switching an application between a light and a
//! dark theme, plus a typed model of the styling configuration that decides
//! how dark styles are applied.
//!
//! ## Quick start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use themecell::config::StylingConfig;
//! use themecell::theme::{bind_dark_class, RootClasses};
//! use themecell::{ThemeContext, ThemeMode};
//!
//! let config = StylingConfig::default();
//! let ctx = ThemeContext::new();
//! let root = Rc::new(RefCell::new(RootClasses::new()));
//! let _binding = bind_dark_class(ctx.cell(), Rc::clone(&root), &config.dark_mode);
//!
//! ctx.toggle_theme();
//! assert_eq!(ctx.mode(), ThemeMode::Dark);
//! assert_eq!(root.borrow().class_attr(), "dark");
//! ```
//!
//! ## Modules
//!
//! - [`cell`]: [`ObservableCell`], the generic subscribable value
//! - [`theme`]: [`ThemeMode`], [`ThemeContext`], root class binding
//! - [`config`]: [`StylingConfig`](config::StylingConfig) and palette types
//!
//! Everything here is single-threaded. There is no global theme; construct a
//! [`ThemeContext`] at startup and pass it to the components that need it.

pub mod cell;
pub mod config;
pub mod theme;

pub use cell::{ObservableCell, Unsubscribe};
pub use theme::{toggle_theme, Adaptive, ThemeContext, ThemeMode};
