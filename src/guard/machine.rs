//! Machines the guard operates on.

use crate::core::{check, State, StateChange, StateHistory, StateTransition, TransitionTable};
use std::sync::Arc;

/// Anything with a current state and a transition table.
///
/// The guard only reads `current_state` and `transition_table`, and calls
/// `set_current_state` after it has decided a request is legal. Calling
/// `set_current_state` directly bypasses the table.
pub trait Machine {
    type State: State;

    fn current_state(&self) -> &Self::State;

    fn transition_table(&self) -> &TransitionTable<Self::State>;

    fn set_current_state(&mut self, state: Self::State);
}

/// Ready-made machine: a current state, a shared table and a history of
/// every applied transition.
///
/// # Example
///
/// ```rust
/// use stateguard::core::TransitionTable;
/// use stateguard::guard::{attempt_transition, StateMachine};
///
/// let table: TransitionTable<String> =
///     TransitionTable::from_json(r#"{"red": ["green"], "green": ["yellow"], "yellow": ["red"]}"#)
///         .unwrap();
/// let mut light = StateMachine::new("red".to_string(), table);
///
/// let _ = attempt_transition(&mut light, "green".to_string());
/// let _ = attempt_transition(&mut light, "yellow".to_string());
///
/// assert_eq!(light.current_state(), "yellow");
/// assert_eq!(light.history().get_path().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State> {
    current: S,
    table: Arc<TransitionTable<S>>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine in `initial`.
    ///
    /// Accepts an owned table or an `Arc` already shared with other
    /// machines. `initial` is not checked against the table; a machine
    /// starting in an undeclared state is malformed and rejects every
    /// request except a no-op.
    pub fn new(initial: S, table: impl Into<Arc<TransitionTable<S>>>) -> Self {
        Self {
            current: initial,
            table: table.into(),
            history: StateHistory::new(),
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Handle to the table, for building sibling machines.
    pub fn shared_table(&self) -> Arc<TransitionTable<S>> {
        Arc::clone(&self.table)
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// States reachable from the current one.
    pub fn allowed_targets(&self) -> &[S] {
        self.table.allowed(&self.current)
    }

    /// Whether a request for `target` would be applied.
    pub fn can_transition_to(&self, target: &S) -> bool {
        check(&self.table, &self.current, target).is_legal()
    }

    /// Whether the current state is declared with no outgoing edges.
    pub fn is_terminal(&self) -> bool {
        self.table.is_terminal(&self.current)
    }

    /// Whether the current state is missing from the table.
    pub fn is_malformed(&self) -> bool {
        !self.table.declares(&self.current)
    }
}

impl<S: State> Machine for StateMachine<S> {
    type State = S;

    fn current_state(&self) -> &S {
        &self.current
    }

    fn transition_table(&self) -> &TransitionTable<S> {
        &self.table
    }

    fn set_current_state(&mut self, state: S) {
        let from = std::mem::replace(&mut self.current, state);
        self.history.push(StateTransition::now(StateChange {
            from,
            to: self.current.clone(),
        }));
    }
}
