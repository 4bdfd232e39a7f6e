//! Party domain errors
//!
//! This module defines the errors raised while managing users and
//! veterinarians, and the sign-in messages shown on the login and
//! registration forms.

use thiserror::Error;

/// Errors that can occur in the party domain
#[derive(Debug, Error)]
pub enum PartyError {
    /// Invalid state transition attempted
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: String,
        to: String,
    },

    /// Required form fields are blank
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Login form submitted with a blank field
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

impl PartyError {
    /// Creates an InvalidStatusTransition error from two status names
    pub fn transition(from: &str, to: &str) -> Self {
        PartyError::InvalidStatusTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
