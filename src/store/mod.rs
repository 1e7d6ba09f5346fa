use std::cell::{Cell, RefCell};

pub mod project_store;

pub use project_store::ProjectStore;

/// Callback invoked with a full snapshot of the observed items
pub type Listener<T> = Box<dyn FnMut(&[T])>;

/// Ordered set of listeners shared by observable stores
///
/// Listeners run synchronously in registration order. A notification that
/// is requested while one is already running (a listener mutated the store)
/// is folded into one more round after the current one finishes, so every
/// listener only ever sees complete snapshots.
pub struct ListenerRegistry<T> {
    listeners: RefCell<Vec<Listener<T>>>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            pending: Cell::new(false),
        }
    }

    /// Registers a listener. There is no unsubscribe and no duplicate check.
    pub fn add(&self, listener: Listener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every listener with the snapshot produced by `snapshot`.
    pub fn notify_with(&self, snapshot: impl Fn() -> Vec<T>) {
        if self.notifying.get() {
            self.pending.set(true);
            return;
        }

        self.notifying.set(true);
        loop {
            self.pending.set(false);
            let items = snapshot();

            let mut active = self.listeners.take();
            for listener in active.iter_mut() {
                listener(&items);
            }

            // Listeners added during the round go after the existing ones
            let mut added = self.listeners.take();
            active.append(&mut added);
            *self.listeners.borrow_mut() = active;

            if !self.pending.get() {
                break;
            }
        }
        self.notifying.set(false);
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_listeners_run_in_registration_order() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            registry.add(Box::new(move |items: &[u32]| {
                calls.borrow_mut().push((name, items.len()));
            }));
        }

        registry.notify_with(|| vec![1, 2]);

        assert_eq!(
            *calls.borrow(),
            vec![("first", 2), ("second", 2), ("third", 2)]
        );
    }

    #[test]
    fn test_duplicate_listeners_are_kept() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let count = Rc::new(Cell::new(0));

        let make = |count: Rc<Cell<u32>>| -> Listener<u32> {
            Box::new(move |_: &[u32]| count.set(count.get() + 1))
        };
        registry.add(make(Rc::clone(&count)));
        registry.add(make(Rc::clone(&count)));
        assert_eq!(registry.len(), 2);

        registry.notify_with(Vec::new);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_notify_without_listeners() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::default();
        assert!(registry.is_empty());
        registry.notify_with(|| vec![1]);
    }
}
