//! State identifiers.
//!
//! Every value a transition table mentions implements [`State`]. The trait is
//! implemented for `String` so string-keyed tables work out of the box, and
//! the [`state_enum!`](crate::state_enum) macro derives it for plain enums.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Identifier of a state in a transition table.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into outcomes and history records
/// - `PartialEq`: legality is decided by comparing identifiers
/// - `Debug`: identifiers show up in diagnostics
/// - `Serialize` + `Deserialize`: tables are declared in JSON
///
/// # Example
///
/// ```rust
/// use stateguard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// assert_eq!("draft".to_string().name(), "draft");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in diagnostics and log fields.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
