//! Claims domain errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid claim amount: {0}")]
    InvalidClaimAmount(String),

    #[error("Approved amount {approved} exceeds claimed amount {claimed}")]
    ApprovedExceedsClaimed { approved: String, claimed: String },

    #[error(transparent)]
    Money(#[from] MoneyError),
}
