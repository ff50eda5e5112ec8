//! Stateguard: a table-driven state transition guard
//!
//! A machine declares, once, which states are reachable from which. The guard
//! checks every requested transition against that table: legal requests are
//! applied and published to observers, illegal ones are refused and reported,
//! and requests for the current state are ignored. Nothing panics on a bad
//! request; every call returns a [`TransitionOutcome`].
//!
//! # Core Concepts
//!
//! - **State**: identifiers implementing the `State` trait (`String` or enums)
//! - **Transition table**: closed, ordered map from a state to its targets
//! - **Guard**: validates, applies, and reports through injected sinks
//! - **Sinks**: notification of applied changes, diagnostics for rejections
//!
//! # Example
//!
//! ```rust
//! use stateguard::core::{TransitionOutcome, TransitionTable};
//! use stateguard::guard::{attempt_transition, StateMachine};
//!
//! let table: TransitionTable<String> = TransitionTable::from_json(
//!     r#"{"draft": ["submitted"], "submitted": ["approved", "rejected"], "approved": [], "rejected": ["draft"]}"#,
//! )
//! .unwrap();
//! let mut machine = StateMachine::new("draft".to_string(), table);
//!
//! let outcome = attempt_transition(&mut machine, "approved".to_string());
//! assert!(matches!(outcome, TransitionOutcome::Rejected(_)));
//! assert_eq!(machine.current_state(), "draft");
//!
//! let outcome = attempt_transition(&mut machine, "submitted".to_string());
//! assert!(outcome.is_applied());
//! assert_eq!(machine.current_state(), "submitted");
//! ```

pub mod builder;
pub mod core;
pub mod guard;
pub mod sink;

// Re-export commonly used types
pub use self::builder::{BuildError, TableBuilder};
pub use self::core::{Rejection, State, StateChange, TransitionOutcome, TransitionTable};
pub use self::guard::{
    attempt_transition, attempt_transition_with, Machine, StateMachine, TransitionGuard,
};
pub use self::sink::{DiagnosticSink, NotificationSink, Observers, TracingDiagnostics};
