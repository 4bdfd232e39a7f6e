//! Status lifecycles
//!
//! Every back-office record moves through a small, fixed set of statuses.
//! A [`Lifecycle`] is implemented by each status enum and describes which
//! admin actions are available from a given status and where they lead.
//!
//! ```text
//! pending --start_review--> under_review --approve--> approved
//!                                        \--reject--> rejected
//! ```
//!
//! Transitions are guarded only by the current status. Anything else a
//! transition needs (an approved amount, a transaction reference) is
//! checked by the owning record.

use serde::Serialize;
use std::fmt;

use crate::error::CoreError;

/// One row of a transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition<S: 'static> {
    /// Action name as shown to an administrator (e.g. `start_review`)
    pub action: &'static str,
    /// Status reached by the action
    pub to: S,
}

impl<S> Transition<S> {
    pub const fn new(action: &'static str, to: S) -> Self {
        Self { action, to }
    }
}

/// A status enumeration with a transition table
pub trait Lifecycle: Copy + Eq + fmt::Debug + Sized + 'static {
    /// Name of the record kind, used in error messages
    const ENTITY: &'static str;

    /// All statuses in display order
    fn all() -> &'static [Self];

    /// Actions available from this status
    fn transitions(&self) -> &'static [Transition<Self>];

    /// Human readable label
    fn label(&self) -> &'static str;

    /// Machine name, as serialized
    fn as_str(&self) -> &'static str;

    fn can_transition_to(&self, target: Self) -> bool {
        self.transitions().iter().any(|t| t.to == target)
    }

    /// True when no further action is available
    fn is_terminal(&self) -> bool {
        self.transitions().is_empty()
    }

    /// Looks up the status reached by `action`, if the action is available
    fn after(&self, action: &str) -> Option<Self> {
        self.transitions()
            .iter()
            .find(|t| t.action == action)
            .map(|t| t.to)
    }

    /// Validates a transition and returns the target status
    fn transition(&self, target: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(CoreError::invalid_transition(Self::ENTITY, self.as_str(), target.as_str()))
        }
    }

    /// Parses a machine name back into a status
    fn parse(value: &str) -> Result<Self, CoreError> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| CoreError::unknown_status(Self::ENTITY, value))
    }
}

/// Implements [`Lifecycle`] for a status enum from a transition table
///
/// ```rust,ignore
/// lifecycle! {
///     ApplicationStatus, "application";
///     Pending => "pending", "Pending", [("start_review", UnderReview)];
///     UnderReview => "under_review", "Under Review", [("approve", Approved)];
///     Approved => "approved", "Approved", [];
/// }
/// ```
#[macro_export]
macro_rules! lifecycle {
    (
        $status:ident, $entity:literal;
        $( $variant:ident => $name:literal, $label:literal, [ $( ($action:literal, $to:ident) ),* $(,)? ] );+ $(;)?
    ) => {
        impl $crate::workflow::Lifecycle for $status {
            const ENTITY: &'static str = $entity;

            fn all() -> &'static [Self] {
                &[ $( $status::$variant ),+ ]
            }

            fn transitions(&self) -> &'static [$crate::workflow::Transition<Self>] {
                match self {
                    $(
                        $status::$variant => &[
                            $( $crate::workflow::Transition { action: $action, to: $status::$to } ),*
                        ],
                    )+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $status::$variant => $label, )+
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $( $status::$variant => $name, )+
                }
            }
        }

        impl ::std::fmt::Display for $status {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::workflow::Lifecycle::label(self))
            }
        }
    };
}
