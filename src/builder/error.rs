//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when declaring a transition table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No states declared. Call .state(from, targets) or .terminal(state) before .build()")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },
}
