use std::collections::HashMap;

/// Kind of state a mutation touched; views re-render on the kinds they read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Change {
    Cart,
    CartPanel,
    Filters,
    Reviews,
}

type Listener<S> = Box<dyn Fn(&S)>;

/// Synchronous listener registry keyed by [`Change`].
///
/// Listeners receive the owning state after the mutation has completed and
/// run in registration order on the caller's thread.
pub struct ChangeNotifier<S> {
    listeners: HashMap<Change, Vec<Listener<S>>>,
}

impl<S> ChangeNotifier<S> {
    pub fn new() -> Self {
        ChangeNotifier {
            listeners: HashMap::new(),
        }
    }

    pub fn on<F>(&mut self, change: Change, listener: F)
    where
        F: Fn(&S) + 'static,
    {
        self.listeners
            .entry(change)
            .or_default()
            .push(Box::new(listener));
    }

    pub fn emit(&self, change: Change, state: &S) {
        if let Some(listeners) = self.listeners.get(&change) {
            tracing::trace!(?change, listeners = listeners.len(), "notifying");
            for listener in listeners {
                listener(state);
            }
        }
    }

    pub fn listener_count(&self, change: Change) -> usize {
        self.listeners.get(&change).map_or(0, Vec::len)
    }
}

impl<S> Default for ChangeNotifier<S> {
    fn default() -> Self {
        Self::new()
    }
}
