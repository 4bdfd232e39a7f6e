//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::{CoreError, MoneyError, PortError};
use domain_billing::PaymentError;
use domain_claims::ClaimError;
use domain_party::PartyError;
use domain_policy::{ApplicationError, TermsError};

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Usually an invalid status transition
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: Vec::new(),
        }
    }

    fn missing_fields(message: String, fields: Vec<String>) -> Self {
        ApiError::Validation {
            message,
            details: fields,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Internal(msg) => {
                error!(message = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details).filter(|d| !d.is_empty()),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { message, field } => ApiError::Validation {
                message,
                details: field.into_iter().collect(),
            },
            PortError::Conflict { message } => ApiError::Conflict(message),
            PortError::Internal { message } => ApiError::Internal(message),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_conflict() {
            ApiError::Conflict(err.to_string())
        } else {
            ApiError::BadRequest(err.to_string())
        }
    }
}

impl From<MoneyError> for ApiError {
    fn from(err: MoneyError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::InvalidStatusTransition { .. } => ApiError::Conflict(message),
            ApplicationError::MissingRequiredFields(fields) => ApiError::missing_fields(message, fields),
            ApplicationError::QuoteAmountRequired | ApplicationError::InvalidQuoteAmount(_) => {
                ApiError::validation(message)
            }
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        let message = err.to_string();
        match err {
            ClaimError::InvalidStatusTransition { .. } => ApiError::Conflict(message),
            ClaimError::MissingRequiredFields(fields) => ApiError::missing_fields(message, fields),
            ClaimError::InvalidClaimAmount(_) | ClaimError::ApprovedExceedsClaimed { .. } => {
                ApiError::validation(message)
            }
            ClaimError::Money(_) => ApiError::BadRequest(message),
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        let message = err.to_string();
        match err {
            PaymentError::InvalidStatusTransition { .. } => ApiError::Conflict(message),
            PaymentError::InvalidProgress(_) | PaymentError::InvalidTransactionId(_) => {
                ApiError::validation(message)
            }
            PaymentError::Money(_) => ApiError::BadRequest(message),
        }
    }
}

impl From<PartyError> for ApiError {
    fn from(err: PartyError) -> Self {
        let message = err.to_string();
        match err {
            PartyError::InvalidStatusTransition { .. } => ApiError::Conflict(message),
            PartyError::MissingRequiredFields(fields) => ApiError::missing_fields(message, fields),
            PartyError::MissingCredentials => ApiError::BadRequest(message),
            PartyError::InvalidEmail(_)
            | PartyError::PasswordMismatch
            | PartyError::PasswordTooShort(_) => ApiError::validation(message),
        }
    }
}

impl From<TermsError> for ApiError {
    fn from(err: TermsError) -> Self {
        let message = err.to_string();
        match err {
            TermsError::InvalidStatusTransition { .. } | TermsError::Archived(_) => {
                ApiError::Conflict(message)
            }
            TermsError::MissingRequiredFields(fields) => ApiError::missing_fields(message, fields),
            TermsError::InvalidVersion(_) => ApiError::BadRequest(message),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Signing(msg) => ApiError::Internal(msg),
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        details.sort();

        ApiError::Validation {
            message: "Request validation failed".to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_errors_are_conflicts() {
        let err: ApiError = ClaimError::InvalidStatusTransition {
            from: "pending".to_string(),
            to: "approved".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Conflict(_)));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_missing_fields_carry_details() {
        let err: ApiError = PartyError::MissingRequiredFields(vec!["email".to_string()]).into();
        match err {
            ApiError::Validation { details, .. } => assert_eq!(details, vec!["email".to_string()]),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_port_not_found() {
        let err: ApiError = PortError::not_found("Claim", "CLM-099").into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
