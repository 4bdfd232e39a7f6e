//! Billing Domain - Claim Payments
//!
//! Once a claim is approved the payout to the pet owner is tracked as a
//! [`Payment`]. Payments are grouped into [`PaymentBatch`]es for the bank
//! run.
//!
//! # Payment Lifecycle
//!
//! ```text
//! Pending -> Processing -> Completed
//!                      \-> Failed -> Processing (retry)
//!                                \-> Cancelled
//! ```
//!
//! # Batch Lifecycle
//!
//! ```text
//! Pending -> Processing (25%) -> Completed (100%)
//!                            \-> Failed
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{Payment, PaymentSummary};
//!
//! payment.process()?;
//! payment.mark_completed(None, today)?;
//!
//! let summary = PaymentSummary::from_payments(&payments, today)?;
//! ```

pub mod payment;
pub mod batch;
pub mod error;

pub use payment::{
    filter_payments, Payment, PaymentMethod, PaymentStatus, PaymentSummary, PaymentTab,
};
pub use batch::{start_batch_processing, BatchStatus, PaymentBatch};
pub use error::PaymentError;
