//! Behavior of the theme store as seen by application code.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use themecell::config::StylingConfig;
use themecell::theme::{bind_dark_class, ClassList, RootClasses};
use themecell::{toggle_theme, ObservableCell, ThemeContext, ThemeMode};

type Log = Rc<RefCell<Vec<ThemeMode>>>;

fn record(cell: &ObservableCell<ThemeMode>) -> (Log, themecell::Unsubscribe) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let handle = cell.subscribe(move |mode| sink.borrow_mut().push(*mode));
    (log, handle)
}

#[test]
fn test_toggle_twice_from_light() {
    let theme = ObservableCell::new(ThemeMode::Light);
    let (a, _ha) = record(&theme);
    let (b, _hb) = record(&theme);

    toggle_theme(&theme);
    assert_eq!(theme.get(), ThemeMode::Dark);
    assert_eq!(*a.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
    assert_eq!(*b.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);

    toggle_theme(&theme);
    assert_eq!(theme.get(), ThemeMode::Light);
    assert_eq!(
        *a.borrow(),
        vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
    assert_eq!(
        *b.borrow(),
        vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
}

#[test]
fn test_repeated_set_notifies_once() {
    let theme = ObservableCell::new(ThemeMode::Light);
    let (a, _ha) = record(&theme);
    let (b, _hb) = record(&theme);

    theme.set(ThemeMode::Dark);
    theme.set(ThemeMode::Dark);

    // One immediate call on subscribe, one change notification.
    assert_eq!(*a.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
    assert_eq!(*b.borrow(), vec![ThemeMode::Light, ThemeMode::Dark]);
}

#[test]
fn test_subscribe_sees_value_at_subscription_time() {
    let theme = ObservableCell::new(ThemeMode::Light);
    theme.set(ThemeMode::Dark);

    let (log, _handle) = record(&theme);
    assert_eq!(*log.borrow(), vec![ThemeMode::Dark]);
}

#[test]
fn test_notifications_follow_subscription_order() {
    let theme = ObservableCell::new(ThemeMode::Light);
    let order = Rc::new(RefCell::new(Vec::new()));
    let handles: Vec<_> = ["first", "second", "third"]
        .into_iter()
        .map(|name| {
            let order = Rc::clone(&order);
            theme.subscribe(move |_| order.borrow_mut().push(name))
        })
        .collect();
    order.borrow_mut().clear();

    theme.set(ThemeMode::Dark);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    assert!(handles.iter().all(|h| h.is_active()));
}

#[test]
fn test_context_wiring_with_default_config() {
    let config = StylingConfig::default();
    let ctx = ThemeContext::new();
    let root = Rc::new(RefCell::new(RootClasses::parse("min-h-screen")));
    let binding = bind_dark_class(ctx.cell(), Rc::clone(&root), &config.dark_mode)
        .expect("default configuration uses the class strategy");
    let (log, _handle) = record(ctx.cell());

    ctx.toggle_theme();
    assert!(root.borrow().has_class("dark"));
    assert!(root.borrow().has_class("min-h-screen"));

    ctx.toggle_theme();
    assert!(!root.borrow().has_class("dark"));

    binding.unsubscribe();
    ctx.toggle_theme();
    assert!(!root.borrow().has_class("dark"));
    assert_eq!(
        *log.borrow(),
        vec![
            ThemeMode::Light,
            ThemeMode::Dark,
            ThemeMode::Light,
            ThemeMode::Dark
        ]
    );
}

#[test]
fn test_listener_reverting_theme_leaves_root_in_sync() {
    let theme = ObservableCell::new(ThemeMode::Light);
    let revert = theme.clone();
    let _guard = theme.subscribe(move |mode| {
        if mode.is_dark() {
            revert.set(ThemeMode::Light);
        }
    });
    let root = Rc::new(RefCell::new(RootClasses::new()));
    let _binding = bind_dark_class(
        &theme,
        Rc::clone(&root),
        &StylingConfig::default().dark_mode,
    );
    let (log, _handle) = record(&theme);

    theme.set(ThemeMode::Dark);
    assert_eq!(theme.get(), ThemeMode::Light);
    assert!(!root.borrow().has_class("dark"));
    assert_eq!(
        *log.borrow(),
        vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
}

proptest! {
    #[test]
    fn toggle_parity_from_light(count in 0usize..64) {
        let theme = ObservableCell::new(ThemeMode::Light);
        for _ in 0..count {
            toggle_theme(&theme);
        }
        let expected = if count % 2 == 0 { ThemeMode::Light } else { ThemeMode::Dark };
        prop_assert_eq!(theme.get(), expected);
        prop_assert_eq!(theme.version(), count as u64);
    }

    #[test]
    fn unsubscribed_listener_hears_nothing(
        before in 0usize..8,
        after in proptest::collection::vec(prop::bool::ANY, 0..16),
    ) {
        let theme = ObservableCell::new(ThemeMode::Light);
        let (log, handle) = record(&theme);
        for _ in 0..before {
            toggle_theme(&theme);
        }
        handle.unsubscribe();
        let heard = log.borrow().len();

        for dark in after {
            if dark {
                theme.set(ThemeMode::Dark);
            } else {
                theme.update(|m| m.toggled());
            }
        }
        prop_assert_eq!(log.borrow().len(), heard);
        prop_assert_eq!(heard, before + 1);
    }

    #[test]
    fn each_change_notifies_every_listener_once(
        modes in proptest::collection::vec(prop::bool::ANY, 0..32),
        listeners in 1usize..5,
    ) {
        let theme = ObservableCell::new(ThemeMode::Light);
        let logs: Vec<_> = (0..listeners).map(|_| record(&theme)).collect();

        let mut current = ThemeMode::Light;
        let mut changes = 0;
        for dark in modes {
            let next = if dark { ThemeMode::Dark } else { ThemeMode::Light };
            if next != current {
                changes += 1;
                current = next;
            }
            theme.set(next);
        }

        for (log, _) in &logs {
            prop_assert_eq!(log.borrow().len(), changes + 1);
        }
    }
}
