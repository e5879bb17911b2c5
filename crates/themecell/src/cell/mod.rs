//! Reactive value cells.
//!
//! - [`ObservableCell`]: a shared value with synchronous change notification
//! - [`Unsubscribe`]: handle that removes a listener registered on a cell
//!
//! Cells are single-threaded (`Rc<RefCell<..>>`). Hand clones of a cell to
//! whichever component needs it; all clones share one value.

mod observable;

pub use observable::{ObservableCell, Unsubscribe};
