use std::cell::RefCell;

use leptos::prelude::{GetUntracked, RwSignal, Set};

/// Single-slot storage a state machine reads and replaces.
///
/// Values are cloned in and out so no borrow is ever held across an await.
/// A cell can go away underneath an in-flight request (its page unmounted);
/// both operations then report `None`/`false` and the caller drops its
/// outcome.
pub trait StateCell<T> {
    fn snapshot(&self) -> Option<T>;
    fn replace(&self, value: T) -> bool;
}

impl<T: Clone> StateCell<T> for RefCell<T> {
    fn snapshot(&self) -> Option<T> {
        Some(self.borrow().clone())
    }

    fn replace(&self, value: T) -> bool {
        *self.borrow_mut() = value;
        true
    }
}

/// Reactive backing: every `replace` notifies subscribed views.
impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn snapshot(&self) -> Option<T> {
        GetUntracked::try_get_untracked(self)
    }

    fn replace(&self, value: T) -> bool {
        // `try_set` hands the value back when the signal is disposed.
        Set::try_set(self, value).is_none()
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::{Dispose, Owner};

    use super::*;

    #[test]
    fn test_refcell_never_goes_away() {
        let cell = RefCell::new(1);
        assert!(StateCell::replace(&cell, 2));
        assert_eq!(StateCell::snapshot(&cell), Some(2));
    }

    #[test]
    fn test_disposed_signal_reports_gone() {
        let owner = Owner::new();
        let signal = owner.with(|| RwSignal::new(1));
        assert!(StateCell::replace(&signal, 2));
        assert_eq!(StateCell::snapshot(&signal), Some(2));

        signal.dispose();
        assert_eq!(StateCell::snapshot(&signal), None);
        assert!(!StateCell::replace(&signal, 3));
    }
}
