//! Record of applied transitions.
//!
//! Only legal transitions are recorded. Rejections and no-ops never change
//! the machine, so they never appear here.

use super::outcome::StateChange;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single applied transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Stamp a change with the current time.
    pub fn now(change: StateChange<S>) -> Self {
        Self {
            from: change.from,
            to: change.to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, immutable history of applied transitions.
///
/// `record` returns a new history with the transition appended; the
/// original is left as it was.
///
/// # Example
///
/// ```rust
/// use stateguard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: "draft".to_string(),
///     to: "submitted".to_string(),
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: "submitted".to_string(),
///     to: "approved".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // draft -> submitted -> approved
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States traversed, in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and the last recorded transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
