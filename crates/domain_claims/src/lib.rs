//! Claims Management Domain
//!
//! Claims are filed by clinics after treating an insured pet. An agent
//! reviews the claim, approves or rejects it, and approved work flows on
//! to payment.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Under Review -> Approved
//!                        \-> Rejected
//!                        \-> Processing -> Payment Pending -> Completed
//! ```

pub mod claim;
pub mod summary;
pub mod error;

pub use claim::{filter_claims, Claim, ClaimStatus, ClaimTab, ClaimType, NewClaim};
pub use summary::ClaimSummary;
pub use error::ClaimError;
