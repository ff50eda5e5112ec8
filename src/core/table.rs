//! Declarative transition tables.
//!
//! A table maps each declared state to the ordered list of states directly
//! reachable from it. Tables are closed: once built they are never mutated,
//! and nothing in this crate adds entries to them.

use super::error::TableError;
use super::state::State;
use crate::builder::BuildError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Closed mapping from a state to the states directly reachable from it.
///
/// Entries keep their declaration order. A declared state with an empty
/// list is terminal; a state that is never declared has no outgoing edges
/// either, but a machine sitting in it is considered malformed.
///
/// # Example
///
/// ```rust
/// use stateguard::core::TransitionTable;
///
/// let table: TransitionTable<String> = TransitionTable::from_json(
///     r#"{"draft": ["submitted"], "submitted": ["approved", "rejected"], "approved": [], "rejected": ["draft"]}"#,
/// )
/// .unwrap();
///
/// assert!(table.is_legal(&"draft".to_string(), &"submitted".to_string()));
/// assert!(!table.is_legal(&"draft".to_string(), &"approved".to_string()));
/// assert!(table.is_terminal(&"approved".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable<S: State> {
    entries: Vec<(S, Vec<S>)>,
}

impl<S: State> TransitionTable<S> {
    /// Build a table from declared entries, rejecting empty tables and
    /// duplicate declarations.
    pub(crate) fn from_entries(entries: Vec<(S, Vec<S>)>) -> Result<Self, BuildError> {
        if entries.is_empty() {
            return Err(BuildError::NoStates);
        }

        for (i, (state, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == state) {
                return Err(BuildError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a table from a JSON object of `state -> [targets]`.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        serde_json::from_str(json).map_err(|e| TableError::DeserializationFailed(e.to_string()))
    }

    /// Render the table as a JSON object, in declaration order.
    pub fn to_json(&self) -> Result<String, TableError> {
        serde_json::to_string(self).map_err(|e| TableError::SerializationFailed(e.to_string()))
    }

    /// Allowed targets for a declared state, or `None` if it is not a key.
    pub fn get(&self, state: &S) -> Option<&[S]> {
        self.entries
            .iter()
            .find(|(declared, _)| declared == state)
            .map(|(_, targets)| targets.as_slice())
    }

    /// Allowed targets for a state. Undeclared states have none.
    pub fn allowed(&self, state: &S) -> &[S] {
        self.get(state).unwrap_or(&[])
    }

    /// Whether `to` is directly reachable from `from`.
    pub fn is_legal(&self, from: &S, to: &S) -> bool {
        self.allowed(from).contains(to)
    }

    /// Whether the state is declared as a key.
    pub fn declares(&self, state: &S) -> bool {
        self.get(state).is_some()
    }

    /// Whether the state appears anywhere in the table, as a key or a target.
    pub fn contains(&self, state: &S) -> bool {
        self.entries
            .iter()
            .any(|(declared, targets)| declared == state || targets.contains(state))
    }

    /// Whether the state is declared with no outgoing edges.
    pub fn is_terminal(&self, state: &S) -> bool {
        matches!(self.get(state), Some(targets) if targets.is_empty())
    }

    /// Every state the table mentions: declared keys first, then targets
    /// that are never declared, each once, in first-seen order.
    pub fn states(&self) -> Vec<&S> {
        let mut states: Vec<&S> = self.entries.iter().map(|(declared, _)| declared).collect();
        for target in self.undeclared_targets() {
            states.push(target);
        }
        states
    }

    /// Targets that are never declared as keys.
    ///
    /// A machine that moves into one of these ends up malformed: every
    /// further request except a no-op is rejected.
    pub fn undeclared_targets(&self) -> Vec<&S> {
        let mut undeclared: Vec<&S> = Vec::new();
        for (_, targets) in &self.entries {
            for target in targets {
                if !self.declares(target) && !undeclared.contains(&target) {
                    undeclared.push(target);
                }
            }
        }
        undeclared
    }

    /// Iterate over `(state, allowed targets)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[S])> {
        self.entries
            .iter()
            .map(|(declared, targets)| (declared, targets.as_slice()))
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: State> Serialize for TransitionTable<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (state, targets) in &self.entries {
            map.serialize_entry(state, targets)?;
        }
        map.end()
    }
}

impl<'de, S: State> Deserialize<'de> for TransitionTable<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

struct TableVisitor<S>(PhantomData<S>);

impl<'de, S: State> Visitor<'de> for TableVisitor<S> {
    type Value = TransitionTable<S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from state to a list of reachable states")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((state, targets)) = access.next_entry::<S, Vec<S>>()? {
            entries.push((state, targets));
        }
        TransitionTable::from_entries(entries).map_err(serde::de::Error::custom)
    }
}
