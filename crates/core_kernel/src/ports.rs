//! Ports for record storage
//!
//! Domain crates describe their records; storage adapters (today only the
//! in-memory adapter in `infra_store`) implement [`Repository`] for them.
//!
//! ```text
//!   interface_api handlers
//!            │
//!            ▼
//!   Repository<R>  (this module)
//!            ▲
//!            │
//!   InMemoryRepository<R>  (infra_store)
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested record was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A record failed validation before it reached storage
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all ports
///
/// Ports are shared between request handlers, so they must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// A storable back-office record
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type, displayed as e.g. `CLM-001`
    type Id: Clone + Eq + fmt::Display + Send + Sync + 'static;

    /// Record kind used in error messages (e.g. `Claim`)
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
}

/// Identifiers that are allocated from a numeric sequence
pub trait SequenceId: Copy {
    fn from_sequence(sequence: u32) -> Self;
    fn sequence(&self) -> u32;
}

macro_rules! sequence_ids {
    ($($id:ty),+ $(,)?) => {
        $(
            impl SequenceId for $id {
                fn from_sequence(sequence: u32) -> Self {
                    <$id>::new(sequence)
                }

                fn sequence(&self) -> u32 {
                    <$id>::sequence(self)
                }
            }
        )+
    };
}

sequence_ids!(
    crate::ApplicationId,
    crate::ClaimId,
    crate::PaymentId,
    crate::BatchId,
    crate::UserId,
    crate::VetId,
);

/// Storage port for one record type
///
/// Lists are kept newest first, matching how new records appear at the top
/// of every list screen.
#[async_trait]
pub trait Repository<R: Record>: DomainPort {
    /// Returns every record, newest first
    async fn list(&self) -> Result<Vec<R>, PortError>;

    /// Returns the records accepted by `predicate`, newest first
    async fn find(&self, predicate: &(dyn for<'x> Fn(&'x R) -> bool + Send + Sync)) -> Result<Vec<R>, PortError>;

    async fn get(&self, id: &R::Id) -> Result<R, PortError>;

    /// Adds a record at the top of the list
    async fn insert(&self, record: R) -> Result<R, PortError>;

    /// Replaces the record with the same id in place
    async fn update(&self, record: R) -> Result<R, PortError>;

    async fn remove(&self, id: &R::Id) -> Result<R, PortError>;

    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.list().await?.len())
    }
}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub status: AdapterHealth,
    pub message: Option<String>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClaimId;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Claim", ClaimId::new(7));
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Claim"));
        assert!(error.to_string().contains("CLM-007"));
    }

    #[test]
    fn test_sequence_id_round_trip() {
        let id = <ClaimId as SequenceId>::from_sequence(12);
        assert_eq!(SequenceId::sequence(&id), 12);
        assert!(!PortError::conflict("taken").is_not_found());
    }
}
