//! Minimal single-threaded event bus.
//!
//! Listeners run in subscription order until one stops propagation, which
//! mirrors element-level handlers firing before document-level ones.

/// Whether an event continues to later listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Boxed listener.
pub type Listener<E> = Box<dyn FnMut(&E) -> Propagation>;

/// Ordered list of listeners for one event type.
pub struct EventBus<E> {
    listeners: Vec<Listener<E>>,
}

impl<E> EventBus<E> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) -> Propagation + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to each listener until one stops propagation.
    pub fn dispatch(&mut self, event: &E) -> Propagation {
        for listener in &mut self.listeners {
            if listener(event) == Propagation::Stop {
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}
