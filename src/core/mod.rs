//! Core transition types and logic.
//!
//! This module contains the pure side of the guard:
//! - State identifiers via the `State` trait
//! - Closed transition tables
//! - Classification of a request against a table
//! - Outcome types and the history of applied transitions
//!
//! Nothing here mutates a machine or talks to a sink; that happens in
//! [`crate::guard`].

mod error;
mod history;
mod outcome;
mod state;
mod table;
mod verdict;

pub use error::TableError;
pub use history::{StateHistory, StateTransition};
pub use outcome::{Rejection, StateChange, TransitionOutcome};
pub use state::State;
pub use table::TransitionTable;
pub use verdict::{check, Verdict};
