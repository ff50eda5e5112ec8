//! The transition guard.
//!
//! This is the imperative shell around [`crate::core`]: it reads a machine's
//! current state and table, classifies the request, and only on a legal
//! request writes the new state, publishes the change and runs the caller's
//! callback.
//!
//! # Ordering
//!
//! For an applied transition the steps always run in this order:
//!
//! 1. the machine's current state is set to the target
//! 2. the notification sink is told about the change, exactly once
//! 3. the success callback, if any, runs
//!
//! Rejected and no-op requests skip all three. Rejections are reported to the
//! diagnostic sink exactly once; no-ops report nothing.
//!
//! # Concurrency
//!
//! The guard takes `&mut M`, so each call has exclusive access to the machine
//! for its whole check-then-set. Hosts that share a machine across threads
//! wrap it in a `Mutex` and call the guard while holding the lock.

mod machine;

pub use machine::{Machine, StateMachine};

use crate::core::{check, Rejection, State, StateChange, TransitionOutcome, Verdict};
use crate::sink::{DiagnosticSink, NotificationSink, Silent, TracingDiagnostics};

/// Validates requests against a machine's table and reports the result.
///
/// `N` receives applied changes; `D` receives rejection messages. The
/// default guard drops notifications and logs rejections through `tracing`.
///
/// # Example
///
/// ```rust
/// use stateguard::core::{StateChange, TransitionTable};
/// use stateguard::guard::{StateMachine, TransitionGuard};
/// use stateguard::sink::{Observers, TracingDiagnostics};
///
/// let table: TransitionTable<String> = TransitionTable::from_json(
///     r#"{"draft": ["submitted"], "submitted": ["approved", "rejected"], "approved": [], "rejected": ["draft"]}"#,
/// )
/// .unwrap();
/// let mut machine = StateMachine::new("draft".to_string(), table);
///
/// let observers = Observers::new().with(|change: &StateChange<String>| {
///     println!("{} -> {}", change.from, change.to);
/// });
/// let guard = TransitionGuard::new(observers, TracingDiagnostics);
///
/// assert!(guard.attempt(&mut machine, "approved".to_string()).is_rejected());
/// assert!(guard.attempt(&mut machine, "submitted".to_string()).is_applied());
/// assert!(guard.attempt(&mut machine, "submitted".to_string()).is_noop());
/// assert_eq!(machine.current_state(), "submitted");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionGuard<N = Silent, D = TracingDiagnostics> {
    notifications: N,
    diagnostics: D,
}

impl<N, D> TransitionGuard<N, D> {
    pub fn new(notifications: N, diagnostics: D) -> Self {
        Self {
            notifications,
            diagnostics,
        }
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    /// Mutable access to the notification sink, e.g. to subscribe more
    /// observers after the guard was built.
    pub fn notifications_mut(&mut self) -> &mut N {
        &mut self.notifications
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Attempt to move `machine` to `target`.
    pub fn attempt<M>(&self, machine: &mut M, target: M::State) -> TransitionOutcome<M::State>
    where
        M: Machine,
        N: NotificationSink<M::State>,
        D: DiagnosticSink,
    {
        self.attempt_with(machine, target, || {})
    }

    /// Attempt to move `machine` to `target`, running `on_success` only if
    /// the transition is applied.
    ///
    /// The callback runs after the machine has been updated and observers
    /// notified, so it sees the post-transition state.
    pub fn attempt_with<M, F>(
        &self,
        machine: &mut M,
        target: M::State,
        on_success: F,
    ) -> TransitionOutcome<M::State>
    where
        M: Machine,
        N: NotificationSink<M::State>,
        D: DiagnosticSink,
        F: FnOnce(),
    {
        let current = machine.current_state();

        match check(machine.transition_table(), current, &target) {
            Verdict::Unchanged => {
                tracing::trace!(state = target.name(), "transition is a no-op");
                TransitionOutcome::NoOp(target)
            }
            Verdict::NotAllowed => self.reject(Rejection::NotAllowed {
                from: current.clone(),
                to: target,
            }),
            Verdict::UnknownCurrentState => self.reject(Rejection::UnknownCurrentState {
                from: current.clone(),
                to: target,
            }),
            Verdict::Legal => {
                let change = StateChange {
                    from: current.clone(),
                    to: target,
                };
                machine.set_current_state(change.to.clone());
                self.notifications.notify(&change);
                tracing::debug!(
                    from = change.from.name(),
                    to = change.to.name(),
                    "transition applied"
                );
                on_success();
                TransitionOutcome::Applied(change)
            }
        }
    }

    fn reject<S>(&self, rejection: Rejection<S>) -> TransitionOutcome<S>
    where
        S: State,
        D: DiagnosticSink,
    {
        self.diagnostics.rejected(&rejection.to_string());
        TransitionOutcome::Rejected(rejection)
    }
}

/// Attempt a transition with the default guard: no observers, rejections
/// logged through `tracing`.
pub fn attempt_transition<M: Machine>(
    machine: &mut M,
    target: M::State,
) -> TransitionOutcome<M::State> {
    TransitionGuard::<Silent, TracingDiagnostics>::default().attempt(machine, target)
}

/// [`attempt_transition`] with a callback that runs only when the
/// transition is applied.
pub fn attempt_transition_with<M, F>(
    machine: &mut M,
    target: M::State,
    on_success: F,
) -> TransitionOutcome<M::State>
where
    M: Machine,
    F: FnOnce(),
{
    TransitionGuard::<Silent, TracingDiagnostics>::default().attempt_with(
        machine,
        target,
        on_success,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionTable;
    use std::sync::{Arc, Mutex};

    const REVIEW: &str = r#"{
        "draft": ["submitted"],
        "submitted": ["approved", "rejected"],
        "approved": [],
        "rejected": ["draft"]
    }"#;

    fn s(name: &str) -> String {
        name.to_string()
    }

    fn machine_at(state: &str) -> StateMachine<String> {
        StateMachine::new(s(state), TransitionTable::<String>::from_json(REVIEW).unwrap())
    }

    /// Guard whose sinks write into one shared event log.
    fn recording_guard(
        log: &Arc<Mutex<Vec<String>>>,
    ) -> TransitionGuard<impl NotificationSink<String>, impl DiagnosticSink> {
        let notes = Arc::clone(log);
        let diags = Arc::clone(log);
        TransitionGuard::new(
            move |change: &StateChange<String>| {
                notes
                    .lock()
                    .unwrap()
                    .push(format!("notify {} -> {}", change.from, change.to))
            },
            move |message: &str| diags.lock().unwrap().push(format!("diag {}", message)),
        )
    }

    #[test]
    fn legal_transition_is_applied() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("draft");

        let outcome = guard.attempt(&mut machine, s("submitted"));

        assert_eq!(
            outcome,
            TransitionOutcome::Applied(StateChange {
                from: s("draft"),
                to: s("submitted"),
            })
        );
        assert_eq!(machine.current_state(), "submitted");
        assert_eq!(*log.lock().unwrap(), vec!["notify draft -> submitted"]);
    }

    #[test]
    fn illegal_transition_is_rejected_and_reported_once() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("draft");

        let outcome = guard.attempt(&mut machine, s("approved"));

        assert_eq!(
            outcome,
            TransitionOutcome::Rejected(Rejection::NotAllowed {
                from: s("draft"),
                to: s("approved"),
            })
        );
        assert_eq!(machine.current_state(), "draft");
        assert_eq!(
            *log.lock().unwrap(),
            vec!["diag State Machine Error: draft => approved is not an allowed state transition."]
        );
    }

    #[test]
    fn same_state_is_a_silent_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("draft");

        let outcome = guard.attempt(&mut machine, s("draft"));

        assert_eq!(outcome, TransitionOutcome::NoOp(s("draft")));
        assert!(log.lock().unwrap().is_empty());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn callback_runs_after_mutation_and_notification() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("draft");

        let callback_log = Arc::clone(&log);
        let outcome = guard.attempt_with(&mut machine, s("submitted"), || {
            callback_log.lock().unwrap().push("callback".to_string());
        });

        assert!(outcome.is_applied());
        assert_eq!(
            *log.lock().unwrap(),
            vec!["notify draft -> submitted", "callback"]
        );
    }

    #[test]
    fn declared_self_loop_reapplies_and_notifies() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let table =
            TransitionTable::<String>::from_json(r#"{"editing": ["editing", "saved"], "saved": ["editing"]}"#)
                .unwrap();
        let mut machine = StateMachine::new(s("editing"), table);

        let callback_log = Arc::clone(&log);
        let outcome = guard.attempt_with(&mut machine, s("editing"), || {
            callback_log.lock().unwrap().push("callback".to_string());
        });

        assert_eq!(
            outcome,
            TransitionOutcome::Applied(StateChange {
                from: s("editing"),
                to: s("editing"),
            })
        );
        assert_eq!(machine.current_state(), "editing");
        assert_eq!(machine.history().len(), 1);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["notify editing -> editing", "callback"]
        );
    }

    #[test]
    fn callback_is_skipped_unless_applied() {
        let guard = TransitionGuard::new(Silent, Silent);
        let mut machine = machine_at("draft");
        let mut calls = 0;

        let _ = guard.attempt_with(&mut machine, s("approved"), || calls += 1);
        let _ = guard.attempt_with(&mut machine, s("draft"), || calls += 1);

        assert_eq!(calls, 0);
    }

    #[test]
    fn unknown_target_is_rejected_like_any_other() {
        let guard = TransitionGuard::new(Silent, Silent);
        let mut machine = machine_at("draft");

        let outcome = guard.attempt(&mut machine, s("archived"));

        assert!(matches!(
            outcome,
            TransitionOutcome::Rejected(Rejection::NotAllowed { .. })
        ));
        assert_eq!(machine.current_state(), "draft");
    }

    #[test]
    fn malformed_machine_degrades_to_rejection() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("archived");

        let outcome = guard.attempt(&mut machine, s("draft"));

        let rejection = outcome.rejection().cloned().unwrap();
        assert!(rejection.is_malformed());
        assert_eq!(machine.current_state(), "archived");
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn malformed_machine_requesting_itself_is_noop() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let guard = recording_guard(&log);
        let mut machine = machine_at("archived");

        let outcome = guard.attempt(&mut machine, s("archived"));

        assert!(outcome.is_noop());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn observers_see_the_new_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut guard = TransitionGuard::new(crate::sink::Observers::new(), Silent);
        guard
            .notifications_mut()
            .subscribe(move |change: &StateChange<String>| {
                sink.lock().unwrap().push(change.to.clone())
            });
        let mut machine = machine_at("draft");

        let _ = guard.attempt(&mut machine, s("submitted"));
        let _ = guard.attempt(&mut machine, s("rejected"));
        let _ = guard.attempt(&mut machine, s("approved"));

        assert_eq!(*seen.lock().unwrap(), vec!["submitted", "rejected"]);
        assert_eq!(guard.notifications().len(), 1);
    }

    #[test]
    fn free_functions_use_the_default_guard() {
        let mut machine = machine_at("draft");
        let mut called = false;

        assert!(attempt_transition(&mut machine, s("approved")).is_rejected());
        assert!(attempt_transition_with(&mut machine, s("submitted"), || called = true).is_applied());
        assert!(called);
        assert_eq!(machine.current_state(), "submitted");
    }
}
