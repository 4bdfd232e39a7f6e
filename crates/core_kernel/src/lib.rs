//! Core Kernel - Foundational types shared by every back-office domain
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money with precise decimal arithmetic
//! - Sequential display identifiers (`APP-001`, `CLM-002`, ...)
//! - The [`Lifecycle`] trait behind every status workflow
//! - Free-text search and required-field helpers
//! - The [`Repository`] storage port

pub mod money;
pub mod identifiers;
pub mod workflow;
pub mod search;
pub mod validation;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ApplicationId, ClaimId, PaymentId, BatchId, UserId, VetId, IdParseError};
pub use workflow::{Lifecycle, Transition};
pub use search::{matches_term, Searchable};
pub use ports::{
    PortError, DomainPort, Record, SequenceId, Repository,
    AdapterHealth, HealthCheckResult, HealthCheckable,
};
pub use error::CoreError;
