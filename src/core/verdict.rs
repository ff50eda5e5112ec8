//! Pure classification of a transition request.
//!
//! Deciding whether a request is legal involves no side effects, so it lives
//! in the core and is shared by the guard and by callers that only want to
//! ask "could I move there?".

use super::state::State;
use super::table::TransitionTable;

/// How a request from `current` to `target` would be handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Target is listed for the current state.
    Legal,
    /// Target equals the current state and is not listed for it.
    Unchanged,
    /// Current state is declared but does not list the target.
    NotAllowed,
    /// Current state is not declared in the table at all.
    UnknownCurrentState,
}

impl Verdict {
    pub fn is_legal(self) -> bool {
        matches!(self, Self::Legal)
    }

    /// Whether the request would be refused and reported.
    pub fn is_rejection(self) -> bool {
        matches!(self, Self::NotAllowed | Self::UnknownCurrentState)
    }
}

/// Classify a request against a table.
///
/// Membership is checked first: a listed target is legal even when it
/// equals the current state, so a declared self-loop re-applies the state.
/// An unlisted request for the current state is a no-op, including when the
/// current state is not declared at all.
///
/// # Example
///
/// ```rust
/// use stateguard::core::{check, TransitionTable, Verdict};
///
/// let table: TransitionTable<String> = TransitionTable::from_json(
///     r#"{"idle": ["busy"], "busy": ["idle"], "editing": ["editing", "idle"]}"#,
/// )
/// .unwrap();
/// let idle = "idle".to_string();
/// let editing = "editing".to_string();
///
/// assert_eq!(check(&table, &idle, &"busy".to_string()), Verdict::Legal);
/// assert_eq!(check(&table, &idle, &idle), Verdict::Unchanged);
/// assert_eq!(check(&table, &editing, &editing), Verdict::Legal);
/// assert_eq!(check(&table, &idle, &"gone".to_string()), Verdict::NotAllowed);
/// ```
pub fn check<S: State>(table: &TransitionTable<S>, current: &S, target: &S) -> Verdict {
    match table.get(current) {
        Some(allowed) if allowed.contains(target) => Verdict::Legal,
        _ if current == target => Verdict::Unchanged,
        None => Verdict::UnknownCurrentState,
        Some(_) => Verdict::NotAllowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    fn table() -> TransitionTable<String> {
        TransitionTable::from_json(
            r#"{"draft": ["submitted"], "submitted": ["approved", "rejected"], "approved": [], "rejected": ["draft"], "loop": ["loop"]}"#,
        )
        .unwrap()
    }

    #[test]
    fn listed_target_is_legal() {
        assert_eq!(check(&table(), &s("draft"), &s("submitted")), Verdict::Legal);
        assert_eq!(check(&table(), &s("submitted"), &s("rejected")), Verdict::Legal);
    }

    #[test]
    fn unlisted_neighbour_is_not_allowed() {
        assert_eq!(check(&table(), &s("draft"), &s("approved")), Verdict::NotAllowed);
    }

    #[test]
    fn unknown_target_is_not_allowed() {
        assert_eq!(check(&table(), &s("draft"), &s("archived")), Verdict::NotAllowed);
    }

    #[test]
    fn terminal_state_allows_nothing() {
        assert_eq!(check(&table(), &s("approved"), &s("rejected")), Verdict::NotAllowed);
        assert_eq!(check(&table(), &s("approved"), &s("draft")), Verdict::NotAllowed);
    }

    #[test]
    fn same_state_is_unchanged() {
        assert_eq!(check(&table(), &s("draft"), &s("draft")), Verdict::Unchanged);
        assert_eq!(check(&table(), &s("approved"), &s("approved")), Verdict::Unchanged);
    }

    #[test]
    fn declared_self_loop_is_legal() {
        assert_eq!(check(&table(), &s("loop"), &s("loop")), Verdict::Legal);
    }

    #[test]
    fn undeclared_current_state_is_reported() {
        assert_eq!(
            check(&table(), &s("archived"), &s("draft")),
            Verdict::UnknownCurrentState
        );
    }

    #[test]
    fn undeclared_current_state_requesting_itself_is_unchanged() {
        assert_eq!(check(&table(), &s("archived"), &s("archived")), Verdict::Unchanged);
    }

    #[test]
    fn rejection_classification() {
        assert!(Verdict::NotAllowed.is_rejection());
        assert!(Verdict::UnknownCurrentState.is_rejection());
        assert!(!Verdict::Legal.is_rejection());
        assert!(!Verdict::Unchanged.is_rejection());
        assert!(Verdict::Legal.is_legal());
    }
}
