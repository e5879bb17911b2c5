//! Keeps the root element's dark-mode class in step with the theme cell.
//!
//! The cell knows nothing about rendering. The class toggling happens in a
//! listener registered here at wiring time, against any [`ClassList`].

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use super::mode::ThemeMode;
use crate::cell::{ObservableCell, Unsubscribe};
use crate::config::DarkModeStrategy;

/// Something carrying a set of CSS class names, such as a document element.
pub trait ClassList {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// In-memory class list for a root element.
///
/// Classes are kept sorted, so [`RootClasses::class_attr`] is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClasses {
    classes: BTreeSet<String>,
}

impl RootClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a class list from a `class` attribute value.
    pub fn parse(attr: &str) -> Self {
        Self {
            classes: attr.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The classes joined as a `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

impl ClassList for RootClasses {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl fmt::Display for RootClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_attr())
    }
}

/// Mirrors `cell` onto the dark-mode class of `target`.
///
/// With a class strategy, the marker is added while the mode is dark and
/// removed while it is light; the current mode is applied right away. With
/// the media strategy the build tool follows the media query instead, so no
/// listener is installed and `None` is returned.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use themecell::config::DarkModeStrategy;
/// use themecell::theme::{bind_dark_class, ClassList, RootClasses};
/// use themecell::{toggle_theme, ObservableCell, ThemeMode};
///
/// let cell = ObservableCell::new(ThemeMode::Light);
/// let root = Rc::new(RefCell::new(RootClasses::parse("antialiased")));
/// let _binding = bind_dark_class(&cell, Rc::clone(&root), &DarkModeStrategy::class());
///
/// toggle_theme(&cell);
/// assert_eq!(root.borrow().class_attr(), "antialiased dark");
/// ```
pub fn bind_dark_class<L>(
    cell: &ObservableCell<ThemeMode>,
    target: Rc<RefCell<L>>,
    strategy: &DarkModeStrategy,
) -> Option<Unsubscribe>
where
    L: ClassList + 'static,
{
    let Some(marker) = strategy.marker() else {
        tracing::debug!("media dark-mode strategy, no root class binding installed");
        return None;
    };
    let marker = marker.to_string();
    tracing::debug!(marker = %marker, "binding root class to theme mode");

    Some(cell.subscribe(move |mode| {
        let mut classes = target.borrow_mut();
        if mode.is_dark() {
            classes.add_class(&marker);
        } else {
            classes.remove_class(&marker);
        }
    }))
}
