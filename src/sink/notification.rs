//! Notification of applied transitions.

use super::Silent;
use crate::core::{State, StateChange};
use std::fmt;

/// Receives an event for every applied transition.
///
/// Called after the machine has been updated and before the caller's
/// success callback runs, so observers see the new state.
pub trait NotificationSink<S: State>: Send + Sync {
    fn notify(&self, change: &StateChange<S>);
}

impl<S: State> NotificationSink<S> for Silent {
    fn notify(&self, _change: &StateChange<S>) {}
}

impl<S, F> NotificationSink<S> for F
where
    S: State,
    F: Fn(&StateChange<S>) + Send + Sync,
{
    fn notify(&self, change: &StateChange<S>) {
        self(change)
    }
}

type Observer<S> = Box<dyn Fn(&StateChange<S>) + Send + Sync>;

/// Ordered list of observers, each called once per applied transition.
///
/// # Example
///
/// ```rust
/// use stateguard::core::StateChange;
/// use stateguard::sink::{NotificationSink, Observers};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
///
/// let mut observers = Observers::new();
/// observers.subscribe(move |_change: &StateChange<String>| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// observers.notify(&StateChange {
///     from: "idle".to_string(),
///     to: "busy".to_string(),
/// });
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub struct Observers<S: State> {
    observers: Vec<Observer<S>>,
}

impl<S: State> Observers<S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer. Observers run in subscription order.
    pub fn subscribe<F>(&mut self, observer: F) -> &mut Self
    where
        F: Fn(&StateChange<S>) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Builder-style variant of [`Observers::subscribe`].
    pub fn with<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StateChange<S>) + Send + Sync + 'static,
    {
        self.subscribe(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S: State> Default for Observers<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> fmt::Debug for Observers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}

impl<S: State> NotificationSink<S> for Observers<S> {
    fn notify(&self, change: &StateChange<S>) {
        for observer in &self.observers {
            observer(change);
        }
    }
}
