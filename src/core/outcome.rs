//! Results of a transition request.

use super::state::State;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A state change that was applied.
///
/// This is also the event published to notification sinks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateChange<S: State> {
    /// The state being left
    pub from: S,
    /// The state now current
    pub to: S,
}

/// A refused transition request. The machine was left untouched.
///
/// The display text is the message handed to the diagnostic sink.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Rejection<S: State> {
    #[error(
        "State Machine Error: {} => {} is not an allowed state transition.",
        .from.name(),
        .to.name()
    )]
    NotAllowed { from: S, to: S },

    #[error(
        "State Machine Error: {} => {} is not an allowed state transition ({} is not declared in the transition table).",
        .from.name(),
        .to.name(),
        .from.name()
    )]
    UnknownCurrentState { from: S, to: S },
}

impl<S: State> Rejection<S> {
    /// State the machine was (and still is) in.
    pub fn from(&self) -> &S {
        match self {
            Self::NotAllowed { from, .. } | Self::UnknownCurrentState { from, .. } => from,
        }
    }

    /// State that was requested.
    pub fn to(&self) -> &S {
        match self {
            Self::NotAllowed { to, .. } | Self::UnknownCurrentState { to, .. } => to,
        }
    }

    /// Whether the machine's current state is missing from its own table.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::UnknownCurrentState { .. })
    }
}

/// Classification of a transition request.
///
/// Bad requests are ordinary values here, never panics: callers match on the
/// outcome, or use [`TransitionOutcome::into_result`] to propagate a
/// rejection with `?`.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum TransitionOutcome<S: State> {
    /// The machine moved; observers were notified.
    Applied(StateChange<S>),
    /// The target is not reachable from the current state.
    Rejected(Rejection<S>),
    /// The target is the current state; nothing happened.
    NoOp(S),
}

impl<S: State> TransitionOutcome<S> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp(_))
    }

    /// The applied change, if any.
    pub fn change(&self) -> Option<&StateChange<S>> {
        match self {
            Self::Applied(change) => Some(change),
            _ => None,
        }
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection<S>> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    /// Convert to a `Result`, treating no-ops as success without a change.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateguard::core::{Rejection, StateChange, TransitionOutcome};
    ///
    /// fn advance(outcome: TransitionOutcome<String>) -> Result<bool, Rejection<String>> {
    ///     Ok(outcome.into_result()?.is_some())
    /// }
    ///
    /// let applied = TransitionOutcome::Applied(StateChange {
    ///     from: "a".to_string(),
    ///     to: "b".to_string(),
    /// });
    /// assert_eq!(advance(applied), Ok(true));
    /// assert_eq!(advance(TransitionOutcome::NoOp("a".to_string())), Ok(false));
    /// ```
    pub fn into_result(self) -> Result<Option<StateChange<S>>, Rejection<S>> {
        match self {
            Self::Applied(change) => Ok(Some(change)),
            Self::NoOp(_) => Ok(None),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}
