//! Policy domain errors
//!
//! Errors raised while handling insurance applications and policy
//! documents.

use thiserror::Error;

/// Errors that can occur while handling applications
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Invalid state transition attempted
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: String,
        to: String,
    },

    /// Required form fields are blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("A quote amount is required before the quote can be marked received")]
    QuoteAmountRequired,

    #[error("Invalid quote amount: {0}")]
    InvalidQuoteAmount(String),
}

/// Errors that can occur while editing terms documents
#[derive(Debug, Error)]
pub enum TermsError {
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: String,
        to: String,
    },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// Archived documents are read-only
    #[error("Document {0} is archived and cannot be edited")]
    Archived(String),

    #[error("Invalid document version: {0}")]
    InvalidVersion(String),
}
