//! Collaborators the guard reports to.
//!
//! The guard depends on two capabilities supplied by its host:
//!
//! - a [`NotificationSink`] told about every applied transition, standing in
//!   for whatever re-render or observer plumbing the host uses
//! - a [`DiagnosticSink`] told about every rejected request
//!
//! Both are injected into [`TransitionGuard`](crate::guard::TransitionGuard),
//! so tests can swap in doubles that capture what was emitted. Neither
//! returns anything, so neither can change the outcome of a request.

mod diagnostic;
mod notification;

pub use diagnostic::{DiagnosticSink, TracingDiagnostics};
pub use notification::{NotificationSink, Observers};

/// Sink that discards everything it is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Silent;
