//! Macros for declaring enum states.

/// Generate a `State` implementation for a plain enum, and optionally its
/// transition table.
///
/// With a `transitions:` block the macro also generates
/// `fn transition_table() -> Result<TransitionTable<Self>, BuildError>`.
///
/// # Example
///
/// ```
/// use stateguard::core::State;
/// use stateguard::guard::{attempt_transition, StateMachine};
/// use stateguard::state_enum;
///
/// state_enum! {
///     pub enum Review {
///         Draft,
///         Submitted,
///         Approved,
///         Rejected,
///     }
///     transitions: {
///         Draft => [Submitted],
///         Submitted => [Approved, Rejected],
///         Approved => [],
///         Rejected => [Draft],
///     }
/// }
///
/// let mut machine = StateMachine::new(Review::Draft, Review::transition_table().unwrap());
/// assert!(attempt_transition(&mut machine, Review::Submitted).is_applied());
/// assert_eq!(machine.current_state().name(), "Submitted");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(transitions: {
            $($from:ident => [$($to:ident),* $(,)?]),* $(,)?
        })?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        $(
            impl $name {
                /// Transition table declared alongside the enum.
                #[allow(dead_code)]
                $vis fn transition_table() -> ::std::result::Result<
                    $crate::core::TransitionTable<Self>,
                    $crate::builder::BuildError,
                > {
                    $crate::builder::TableBuilder::<Self>::new()
                        $(
                            .state(Self::$from, {
                                let targets: ::std::vec::Vec<Self> = ::std::vec![$(Self::$to),*];
                                targets
                            })
                        )*
                        .build()
                }
            }
        )?
    };
}
