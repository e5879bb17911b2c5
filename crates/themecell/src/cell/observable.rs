//! Observable value cell with synchronous change notification.
//!
//! # Design
//!
//! [`ObservableCell<T>`] keeps its value in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). Every handle cloned from a cell sees the same value and
//! the same listener list. Changes are detected with `PartialEq`; a `set` that
//! does not change the value is silent.
//!
//! # Notification
//!
//! Listeners run synchronously, in subscription order, after the new value has
//! been stored. No borrow of the cell is held while a listener runs, so a
//! listener may read the cell, unsubscribe itself or others, or even call
//! `set` again.
//!
//! A `set` made while listeners are running stores the value at once but
//! queues its round. The queue drains after the current round finishes, so
//! every listener sees values in the order they were stored and its last
//! notification matches [`ObservableCell::get`]. Listeners that never settle
//! keep the queue from draining.
//!
//! A listener removed mid-round is skipped for the rest of that round. A
//! listener added mid-round only receives its immediate initial call.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

struct Listener<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Box<dyn Fn(&T)>,
}

struct CellInner<T> {
    value: T,
    version: u64,
    next_id: u64,
    listeners: Vec<Rc<Listener<T>>>,
    notifying: bool,
    // Listener snapshot taken at `set` time, paired with the stored value.
    pending: VecDeque<(Vec<Rc<Listener<T>>>, T)>,
}

/// A single value with subscribable change notification.
///
/// # Invariants
///
/// 1. The cell always holds a value; there is no empty state.
/// 2. `set(v)` where `v == current` is a no-op: no notification, no version bump.
/// 3. `version` increments by exactly 1 on each value-changing mutation.
/// 4. Listeners are notified in subscription order.
///
/// # Example
///
/// ```rust
/// use themecell::ObservableCell;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let cell = ObservableCell::new(1);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let log = Rc::clone(&seen);
/// let handle = cell.subscribe(move |v| log.borrow_mut().push(*v));
///
/// cell.set(2);
/// cell.set(2);
/// cell.update(|v| v * 10);
/// handle.unsubscribe();
/// cell.set(3);
///
/// assert_eq!(*seen.borrow(), vec![1, 2, 20]);
/// ```
pub struct ObservableCell<T> {
    inner: Rc<RefCell<CellInner<T>>>,
}

impl<T> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableCell")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> ObservableCell<T> {
    /// Creates a cell holding `value`, at version 0 with no listeners.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value,
                version: 0,
                next_id: 0,
                listeners: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrows the current value for the duration of `f`.
    ///
    /// `f` must not mutate this cell.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Replaces the current value.
    ///
    /// When `value` differs from the current value, the version is bumped and
    /// every live listener is called with the new value. Otherwise nothing
    /// happens. Called from inside a listener, the value is stored right away
    /// and delivered once the running round completes.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value.clone();
            inner.version += 1;
            tracing::trace!(
                version = inner.version,
                listeners = inner.listeners.len(),
                queued = inner.notifying,
                "observable cell changed"
            );
            let snapshot = inner.listeners.clone();
            inner.pending.push_back((snapshot, value));
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }
        self.notify();
    }

    /// Derives the next value from the current one and stores it as [`set`](Self::set) would.
    ///
    /// `f` is called exactly once, with no borrow of the cell held.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        self.set(f(&current));
    }

    /// Registers `listener` and calls it once, right away, with the current value.
    ///
    /// Each call registers a separate entry, even for the same closure. The
    /// returned [`Unsubscribe`] removes this entry; dropping it leaves the
    /// listener registered.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Unsubscribe {
        let active = Rc::new(Cell::new(true));
        let (id, entry, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let entry = Rc::new(Listener {
                id,
                active: Rc::clone(&active),
                callback: Box::new(listener),
            });
            inner.listeners.push(Rc::clone(&entry));
            (id, entry, inner.value.clone())
        };
        tracing::trace!(id, "listener subscribed");

        (entry.callback)(&current);

        let weak: Weak<RefCell<CellInner<T>>> = Rc::downgrade(&self.inner);
        Unsubscribe {
            active,
            detach: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|l| l.id != id);
                }
                tracing::trace!(id, "listener unsubscribed");
            }),
        }
    }

    /// Number of value-changing mutations since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        let _reset = NotifyReset { inner: &self.inner };
        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            let Some((listeners, value)) = next else {
                return;
            };
            for listener in &listeners {
                if listener.active.get() {
                    (listener.callback)(&value);
                }
            }
        }
    }
}

/// Ends a notification drain, including one cut short by a panicking listener.
struct NotifyReset<'a, T> {
    inner: &'a RefCell<CellInner<T>>,
}

impl<T> Drop for NotifyReset<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
            inner.pending.clear();
        }
    }
}

/// Handle returned by [`ObservableCell::subscribe`].
///
/// Calling [`unsubscribe`](Self::unsubscribe) removes the listener. Further
/// calls are no-ops, and so is unsubscribing after the cell itself is gone.
pub struct Unsubscribe {
    active: Rc<Cell<bool>>,
    detach: Box<dyn Fn()>,
}

impl Unsubscribe {
    /// Removes the listener from its cell.
    pub fn unsubscribe(&self) {
        if self.active.replace(false) {
            (self.detach)();
        }
    }

    /// Returns `true` until [`unsubscribe`](Self::unsubscribe) is called.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("active", &self.active.get())
            .finish_non_exhaustive()
    }
}
