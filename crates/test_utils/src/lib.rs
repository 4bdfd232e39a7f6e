//! Test Utilities Crate
//!
//! Shared fixtures and helpers for the back-office test suites.
//!
//! # Modules
//!
//! - `fixtures`: ready-made forms, amounts and dates
//! - `builders`: records in any status without walking the workflow
//! - `assertions`: assertion helpers for money and lifecycles
//! - `generators`: proptest strategies and `fake` generated forms

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
