//! Billing domain errors

use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Invalid state transition attempted
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: String,
        to: String,
    },

    /// Batch progress outside 0-100
    #[error("Invalid batch progress: {0}")]
    InvalidProgress(u8),

    /// Transaction references must not be blank when supplied
    #[error("Invalid transaction id: {0:?}")]
    InvalidTransactionId(String),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
