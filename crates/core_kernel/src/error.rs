//! Status errors raised by [`Lifecycle`](crate::workflow::Lifecycle)

use thiserror::Error;

/// A status name or status move that a record kind does not allow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The name is not one of the record kind's statuses
    #[error("unknown {entity} status: {value}")]
    UnknownStatus { entity: &'static str, value: String },

    #[error("{entity} cannot move from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: &'static str,
        to: &'static str,
    },
}

impl CoreError {
    pub fn unknown_status(entity: &'static str, value: impl Into<String>) -> Self {
        CoreError::UnknownStatus {
            entity,
            value: value.into(),
        }
    }

    pub fn invalid_transition(entity: &'static str, from: &'static str, to: &'static str) -> Self {
        CoreError::InvalidTransition { entity, from, to }
    }

    /// True for a move the current status does not offer
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::InvalidTransition { .. })
    }
}
