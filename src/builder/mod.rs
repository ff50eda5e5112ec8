//! Builder API for declaring transition tables in code.
//!
//! Tables can also be loaded from JSON with
//! [`TransitionTable::from_json`](crate::core::TransitionTable::from_json);
//! both paths apply the same validation.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{State, TransitionTable};

/// Fluent builder for a [`TransitionTable`].
///
/// # Example
///
/// ```
/// use stateguard::builder::TableBuilder;
///
/// let table = TableBuilder::<String>::new()
///     .state("draft", ["submitted"])
///     .state("submitted", ["approved", "rejected"])
///     .terminal("approved")
///     .state("rejected", ["draft"])
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 4);
/// assert!(table.is_terminal(&"approved".to_string()));
/// ```
pub struct TableBuilder<S: State> {
    entries: Vec<(S, Vec<S>)>,
}

impl<S: State> TableBuilder<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare `from` and the states directly reachable from it, in order.
    pub fn state<F, I>(mut self, from: F, targets: I) -> Self
    where
        F: Into<S>,
        I: IntoIterator,
        I::Item: Into<S>,
    {
        let targets = targets.into_iter().map(Into::into).collect();
        self.entries.push((from.into(), targets));
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal<F: Into<S>>(mut self, state: F) -> Self {
        self.entries.push((state.into(), Vec::new()));
        self
    }

    /// Build the table.
    /// Returns an error if nothing was declared or a state was declared twice.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        TransitionTable::from_entries(self.entries)
    }
}

impl<S: State> Default for TableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
